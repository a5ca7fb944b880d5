//! # notekeeper-client
//!
//! Client-side note manager for the notekeeper API.
//!
//! The UI is modelled as an explicit [`ViewState`] (`Editing` or
//! `Viewing(note)`) plus the current form [`Draft`]. [`render`] turns those
//! and the fetched list into a [`NotePage`] without any I/O, and
//! [`NoteManager`] drives transitions and re-synchronizes with the server
//! after every mutation.

pub mod api;
pub mod error;
pub mod manager;
pub mod view;

pub use api::{HttpNotesApi, NotesApi};
pub use error::{ClientError, ClientResult};
pub use manager::NoteManager;
pub use view::{render, Draft, FormView, ListRow, NotePage, ViewState};

pub use notekeeper_core::{NewNote, Note};
