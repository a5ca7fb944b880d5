//! In-memory note store.

use async_trait::async_trait;
use notekeeper_core::{NewNote, Note, NoteStore, Result};
use tokio::sync::RwLock;

/// Note store that keeps the collection in process memory.
///
/// Same contract as [`crate::JsonFileStore`] minus durability; handy for
/// tests and for running the server without touching disk.
#[derive(Default)]
pub struct MemoryStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn append(&self, new: NewNote) -> Result<Note> {
        let note = Note::from_new(new);
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn remove_by_id(&self, id: &str) -> Result<usize> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        Ok(before - notes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_then_list() {
        let store = MemoryStore::new();
        let note = store
            .append(NewNote::new("A", "hello").unwrap())
            .await
            .unwrap();

        assert_eq!(store.list().await.unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn test_with_notes_seeds_collection() {
        let seeded = Note {
            id: "seed".into(),
            title: "Seed".into(),
            text: "text".into(),
        };
        let store = MemoryStore::with_notes(vec![seeded.clone()]);

        assert_eq!(store.list().await.unwrap(), vec![seeded]);
        assert_eq!(store.remove_by_id("seed").await.unwrap(), 1);
        assert_eq!(store.remove_by_id("seed").await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }
}
