//! Flat JSON document store.
//!
//! The document is always a JSON array of notes. Every mutation reads the
//! full array, changes it in memory, and writes the full array back
//! pretty-printed. A missing or malformed document is a read failure.
//!
//! Writes go to a sibling `.tmp` file which is then renamed over the
//! document, so a reader never observes a half-written array. Mutations
//! keep each stored entry as raw JSON, so fields this crate does not know
//! about survive a rewrite untouched.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use notekeeper_core::{NewNote, Note, NoteStore, Result};
use tokio::fs;
use tokio::sync::Mutex;
use serde_json::Value;
use tracing::{debug, info};

/// Note store backed by a single JSON file.
///
/// Read-modify-write cycles on one instance are serialized by an internal
/// lock, so concurrent requests through the same store never lose an update.
/// Separate instances (or processes) pointed at the same file still race.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document as an empty array if it does not exist yet.
    ///
    /// Intended for startup only; request handling never recreates a
    /// document that has gone missing.
    pub async fn ensure_exists(&self) -> Result<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&self.path, b"[]").await?;
        info!(path = %self.path.display(), "Initialized empty note store");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn read_all(&self) -> Result<Vec<Note>> {
        let data = fs::read_to_string(&self.path).await?;
        let notes: Vec<Note> = serde_json::from_str(&data)?;
        Ok(notes)
    }

    /// Read the document as raw entries, rejecting it unless every entry is
    /// a well-formed note.
    async fn read_entries(&self) -> Result<Vec<Value>> {
        let data = fs::read_to_string(&self.path).await?;
        let entries: Vec<Value> = serde_json::from_str(&data)?;
        for entry in &entries {
            serde_json::from_value::<Note>(entry.clone())?;
        }
        Ok(entries)
    }

    async fn write_entries(&self, entries: &[Value]) -> Result<()> {
        let data = serde_json::to_string_pretty(entries)?;
        let tmp = self.temp_path();
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl NoteStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Note>> {
        let notes = self.read_all().await?;
        debug!(path = %self.path.display(), note_count = notes.len(), "Read note store");
        Ok(notes)
    }

    async fn append(&self, new: NewNote) -> Result<Note> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        let note = Note::from_new(new);
        entries.push(serde_json::to_value(&note)?);
        self.write_entries(&entries).await?;

        debug!(note_id = %note.id, note_count = entries.len(), "Appended note");
        Ok(note)
    }

    async fn remove_by_id(&self, id: &str) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        let before = entries.len();
        entries.retain(|entry| entry.get("id").and_then(Value::as_str) != Some(id));
        let removed = before - entries.len();
        self.write_entries(&entries).await?;

        debug!(note_id = %id, removed, note_count = entries.len(), "Removed note");
        Ok(removed)
    }
}
