//! # notekeeper-core
//!
//! Core types, traits, and abstractions for the notekeeper application.
//!
//! This crate provides the note model, the error type, and the
//! [`NoteStore`] capability that the storage and API crates build on.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
