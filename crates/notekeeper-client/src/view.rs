//! View state and rendering.
//!
//! Rendering is a pure function of the view state, the current form draft,
//! and the last fetched note list.

use std::fmt;

use notekeeper_core::Note;

/// Which mode the note form is in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Composing a new note; the form is editable.
    #[default]
    Editing,
    /// Showing an existing note read-only.
    Viewing(Note),
}

impl ViewState {
    /// Id of the note being viewed, if any.
    pub fn active_id(&self) -> Option<&str> {
        match self {
            ViewState::Editing => None,
            ViewState::Viewing(note) => Some(&note.id),
        }
    }
}

/// Current contents of the title and text fields while editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub text: String,
}

impl Draft {
    /// Both fields have non-whitespace content.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() && !self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
    }
}

/// One entry in the note list. Every row carries its own delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    /// This row is the note currently shown in the form.
    pub active: bool,
}

/// The note form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub text: String,
    pub read_only: bool,
}

/// Everything the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePage {
    pub rows: Vec<ListRow>,
    pub form: FormView,
    pub show_save: bool,
    pub show_new: bool,
}

pub fn render(state: &ViewState, draft: &Draft, notes: &[Note]) -> NotePage {
    let active_id = state.active_id();
    let rows = notes
        .iter()
        .map(|note| ListRow {
            id: note.id.clone(),
            title: note.title.clone(),
            active: active_id == Some(note.id.as_str()),
        })
        .collect();

    match state {
        ViewState::Viewing(note) => NotePage {
            rows,
            form: FormView {
                title: note.title.clone(),
                text: note.text.clone(),
                read_only: true,
            },
            show_save: false,
            show_new: false,
        },
        ViewState::Editing => NotePage {
            rows,
            form: FormView {
                title: draft.title.clone(),
                text: draft.text.clone(),
                read_only: false,
            },
            show_save: draft.can_save(),
            show_new: true,
        },
    }
}

impl fmt::Display for NotePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "No saved notes")?;
        }
        for row in &self.rows {
            let marker = if row.active { '>' } else { ' ' };
            writeln!(f, "{} {}  {}", marker, row.id, row.title)?;
        }

        if self.form.read_only {
            writeln!(f)?;
            writeln!(f, "# {}", self.form.title)?;
            writeln!(f)?;
            writeln!(f, "{}", self.form.text)?;
        }
        Ok(())
    }
}
