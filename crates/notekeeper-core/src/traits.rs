//! Core traits for notekeeper abstractions.
//!
//! The [`NoteStore`] capability keeps handler logic independent of where the
//! collection lives (flat file, memory, or anything else).

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewNote, Note};

/// Durable owner of the note collection.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Return the full collection in stored order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Assign an id, append the note, persist, and return it.
    async fn append(&self, new: NewNote) -> Result<Note>;

    /// Remove every note with the given id and persist.
    ///
    /// Returns how many notes were removed; zero is not an error.
    async fn remove_by_id(&self, id: &str) -> Result<usize>;
}
