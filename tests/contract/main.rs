//! HTTP contract tests for the notes API, run against an in-memory store.

#[path = "../common/mod.rs"]
mod common;

mod test_notes_create;
mod test_notes_delete;
