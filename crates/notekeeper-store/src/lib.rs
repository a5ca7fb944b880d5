//! # notekeeper-store
//!
//! [`NoteStore`] implementations for notekeeper.
//!
//! - [`JsonFileStore`]: the whole collection as one JSON document, read and
//!   fully rewritten on every mutation
//! - [`MemoryStore`]: an in-process collection for tests and throwaway servers
//!
//! ## Example
//!
//! ```rust,ignore
//! use notekeeper_store::{JsonFileStore, NewNote, NoteStore};
//!
//! let store = JsonFileStore::new("db/db.json");
//! store.ensure_exists().await?;
//! let note = store.append(NewNote::new("A", "hello")?).await?;
//! store.remove_by_id(&note.id).await?;
//! ```

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

// Re-export core types
pub use notekeeper_core::*;
