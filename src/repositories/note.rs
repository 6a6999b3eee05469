use crate::error::StorageError;
use crate::models::{NewNote, Note, NoteFilter, NoteUpdate};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operations the note handlers depend on. Each method is a single
/// storage call.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes matching `filter`, oldest first.
    async fn find(&self, filter: &NoteFilter) -> StorageResult<Vec<Note>>;

    /// `Ok(None)` when no note has this id.
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Note>>;

    async fn create(&self, note: NewNote) -> StorageResult<Note>;

    /// Applies the present fields of `update` and returns the stored note
    /// afterwards, or `Ok(None)` when no note has this id.
    async fn find_by_id_and_update(
        &self,
        id: &str,
        update: NoteUpdate,
    ) -> StorageResult<Option<Note>>;

    /// Removes the note and returns it, or `Ok(None)` when nothing matched.
    async fn find_by_id_and_remove(&self, id: &str) -> StorageResult<Option<Note>>;

    /// Token-based search over title and content, best match first.
    async fn search_text(&self, terms: &str) -> StorageResult<Vec<Note>>;

    async fn ping(&self) -> StorageResult<()>;
}

/// Parses a note identifier. Malformed ids are a storage error, not a
/// validation error.
pub fn parse_note_id(id: &str) -> StorageResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))
}

#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replaces every stored note with `notes` in one transaction.
    pub async fn reseed(&self, notes: Vec<NewNote>) -> StorageResult<Vec<Note>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM notes").execute(&mut *tx).await?;

        let mut inserted = Vec::with_capacity(notes.len());
        for note in notes {
            let note = sqlx::query_as::<_, Note>(
                r#"
                INSERT INTO notes (title, content)
                VALUES ($1, $2)
                RETURNING id, title, content, created
                "#,
            )
            .bind(note.title)
            .bind(note.content)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(note);
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn find(&self, filter: &NoteFilter) -> StorageResult<Vec<Note>> {
        let notes = match &filter.title_pattern {
            Some(pattern) => {
                sqlx::query_as::<_, Note>(
                    r#"
                    SELECT id, title, content, created
                    FROM notes
                    WHERE title ~* $1
                    ORDER BY created ASC
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Note>(
                    r#"
                    SELECT id, title, content, created
                    FROM notes
                    ORDER BY created ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(notes)
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Note>> {
        let id = parse_note_id(id)?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn create(&self, note: NewNote) -> StorageResult<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created
            "#,
        )
        .bind(note.title)
        .bind(note.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn find_by_id_and_update(
        &self,
        id: &str,
        update: NoteUpdate,
    ) -> StorageResult<Option<Note>> {
        let id = parse_note_id(id)?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = $2, content = COALESCE($3, content)
            WHERE id = $1
            RETURNING id, title, content, created
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn find_by_id_and_remove(&self, id: &str) -> StorageResult<Option<Note>> {
        let id = parse_note_id(id)?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            DELETE FROM notes
            WHERE id = $1
            RETURNING id, title, content, created
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn search_text(&self, terms: &str) -> StorageResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created
            FROM notes
            WHERE search_vector @@ websearch_to_tsquery('english', $1)
            ORDER BY ts_rank(search_vector, websearch_to_tsquery('english', $1)) DESC, created ASC
            "#,
        )
        .bind(terms)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
