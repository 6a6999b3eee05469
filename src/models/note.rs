use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

pub const MISSING_TITLE: &str = "Missing `title` in request body";

/// A stored note. Serializes to exactly `id`, `title`, `content`, `created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Body of `POST /notes`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(
        required(message = "Missing `title` in request body"),
        length(min = 1, message = "Missing `title` in request body")
    )]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /notes/:id`. Only `title` and `content` are updateable;
/// any other key in the body is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    #[validate(
        required(message = "Missing `title` in request body"),
        length(min = 1, message = "Missing `title` in request body")
    )]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A validated note ready to be inserted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteUpdate {
    pub title: String,
    pub content: Option<String>,
}

impl TryFrom<CreateNoteRequest> for NewNote {
    type Error = ValidationErrors;

    fn try_from(request: CreateNoteRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        Ok(Self {
            title: request.title.unwrap_or_default(),
            content: request.content,
        })
    }
}

impl TryFrom<UpdateNoteRequest> for NoteUpdate {
    type Error = ValidationErrors;

    fn try_from(request: UpdateNoteRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        Ok(Self {
            title: request.title.unwrap_or_default(),
            content: request.content,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesQuery {
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchNotesQuery {
    pub q: Option<String>,
}

/// Filter applied when listing notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    /// Case-insensitive, unanchored pattern matched against the title.
    pub title_pattern: Option<String>,
}

impl From<ListNotesQuery> for NoteFilter {
    fn from(query: ListNotesQuery) -> Self {
        Self {
            title_pattern: query.search_term.filter(|term| !term.is_empty()),
        }
    }
}
