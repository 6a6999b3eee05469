use crate::error::AppError;
use crate::models::{
    CreateNoteRequest, NewNote, Note, NoteFilter, NoteUpdate, SearchNotesQuery, UpdateNoteRequest,
};
use crate::repositories::NoteStore;
use std::sync::Arc;
use tracing::{debug, info};

const MAX_SEARCH_QUERY_LEN: usize = 500;

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn list_notes(&self, filter: NoteFilter) -> Result<Vec<Note>, AppError> {
        debug!(title_pattern = ?filter.title_pattern, "Listing notes");
        Ok(self.store.find(&filter).await?)
    }

    /// Missing notes are `Ok(None)`, not an error.
    pub async fn get_note(&self, id: &str) -> Result<Option<Note>, AppError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<Note, AppError> {
        let new_note = NewNote::try_from(request)?;
        let note = self.store.create(new_note).await?;
        info!(note_id = %note.id, "Note created");
        Ok(note)
    }

    pub async fn update_note(
        &self,
        id: &str,
        request: UpdateNoteRequest,
    ) -> Result<Option<Note>, AppError> {
        let update = NoteUpdate::try_from(request)?;
        let note = self.store.find_by_id_and_update(id, update).await?;
        if let Some(note) = &note {
            info!(note_id = %note.id, "Note updated");
        }
        Ok(note)
    }

    /// Deleting an unknown id succeeds.
    pub async fn delete_note(&self, id: &str) -> Result<(), AppError> {
        if let Some(note) = self.store.find_by_id_and_remove(id).await? {
            info!(note_id = %note.id, "Note deleted");
        }
        Ok(())
    }

    pub async fn search_notes(&self, query: SearchNotesQuery) -> Result<Vec<Note>, AppError> {
        let terms = query.q.as_deref().map(str::trim).unwrap_or_default();
        if terms.is_empty() {
            return Err(AppError::Validation(
                "Missing `q` in query string".to_string(),
            ));
        }
        if terms.len() > MAX_SEARCH_QUERY_LEN {
            return Err(AppError::Validation("Search query too long".to_string()));
        }

        Ok(self.store.search_text(terms).await?)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}
