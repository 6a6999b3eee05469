use crate::models::NewNote;

const SEED_NOTES: &str = include_str!("../db/seed/notes.json");

/// The bundled demo notes.
pub fn seed_notes() -> Result<Vec<NewNote>, serde_json::Error> {
    serde_json::from_str(SEED_NOTES)
}
