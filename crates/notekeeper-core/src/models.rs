//! Note model and creation input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults::MSG_MISSING_FIELDS;
use crate::error::{Error, Result};

/// A persisted note.
///
/// Notes are immutable once created: they are only ever appended to or
/// removed from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned UUIDv4 string.
    pub id: String,
    pub title: String,
    pub text: String,
}

impl Note {
    /// Build a note from validated input, assigning a fresh random id.
    pub fn from_new(new: NewNote) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            text: new.text,
        }
    }
}

/// Validated input for creating a note.
///
/// Construction only succeeds when both fields are non-empty. Whitespace is
/// preserved as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    title: String,
    text: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let text = text.into();
        if title.is_empty() || text.is_empty() {
            return Err(Error::InvalidInput(MSG_MISSING_FIELDS.to_string()));
        }
        Ok(Self { title, text })
    }

    /// Validate optional fields as they arrive from a request body.
    pub fn from_parts(title: Option<String>, text: Option<String>) -> Result<Self> {
        match (title, text) {
            (Some(title), Some(text)) => Self::new(title, text),
            _ => Err(Error::InvalidInput(MSG_MISSING_FIELDS.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
