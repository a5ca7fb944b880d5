//! Note manager: view-state transitions and server synchronization.
//!
//! Failed requests are logged and swallowed. The manager keeps whatever it
//! last rendered and reports the failure only through the `bool` returned
//! by the async operations.

use notekeeper_core::{NewNote, Note};
use tracing::{debug, error, info};

use crate::api::NotesApi;
use crate::view::{render, Draft, NotePage, ViewState};

pub struct NoteManager<A> {
    api: A,
    notes: Vec<Note>,
    state: ViewState,
    draft: Draft,
}

impl<A: NotesApi> NoteManager<A> {
    /// Starts in `Editing` with an empty draft and no notes loaded.
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            state: ViewState::Editing,
            draft: Draft::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn page(&self) -> NotePage {
        render(&self.state, &self.draft, &self.notes)
    }

    /// Fetch the full list and replace the local copy.
    pub async fn load(&mut self) -> bool {
        match self.api.list_notes().await {
            Ok(notes) => {
                debug!(note_count = notes.len(), "Fetched notes");
                self.notes = notes;
                true
            }
            Err(e) => {
                error!(op = "list", error = %e, "Error fetching notes");
                false
            }
        }
    }

    /// Show a listed note read-only. Unknown ids leave the state unchanged.
    pub fn view_note(&mut self, id: &str) -> bool {
        match self.notes.iter().find(|note| note.id == id) {
            Some(note) => {
                self.state = ViewState::Viewing(note.clone());
                true
            }
            None => false,
        }
    }

    /// Switch to composing a fresh note.
    pub fn new_note(&mut self) {
        self.state = ViewState::Editing;
        self.draft.clear();
    }

    /// Empty both fields without leaving the current mode.
    pub fn clear_form(&mut self) {
        self.draft.clear();
    }

    /// Replace the title field. Ignored while viewing (the form is read-only).
    pub fn type_title(&mut self, title: impl Into<String>) {
        if self.state == ViewState::Editing {
            self.draft.title = title.into();
        }
    }

    /// Replace the text field. Ignored while viewing (the form is read-only).
    pub fn type_text(&mut self, text: impl Into<String>) {
        if self.state == ViewState::Editing {
            self.draft.text = text.into();
        }
    }

    /// Submit the draft as a new note, then resync the list.
    ///
    /// Nothing is sent unless the save control would be visible. On success
    /// the form returns to an empty `Editing` state; on failure the draft is
    /// kept.
    pub async fn save(&mut self) -> bool {
        if self.state != ViewState::Editing || !self.draft.can_save() {
            return false;
        }

        let new = match NewNote::new(self.draft.title.trim(), self.draft.text.trim()) {
            Ok(new) => new,
            Err(e) => {
                error!(op = "create", error = %e, "Error saving note");
                return false;
            }
        };

        match self.api.create_note(&new).await {
            Ok(note) => {
                info!(op = "create", note_id = %note.id, "Note saved");
                self.load().await;
                self.new_note();
                true
            }
            Err(e) => {
                error!(op = "create", error = %e, "Error saving note");
                false
            }
        }
    }

    /// Delete a note by id, then resync the list.
    ///
    /// Deleting the viewed note drops back to `Editing` before the request
    /// is sent.
    pub async fn delete(&mut self, id: &str) -> bool {
        if self.state.active_id() == Some(id) {
            self.new_note();
        }

        match self.api.delete_note(id).await {
            Ok(message) => {
                info!(op = "delete", note_id = %id, "{}", message);
                self.load().await;
                true
            }
            Err(e) => {
                error!(op = "delete", note_id = %id, error = %e, "Error deleting note");
                false
            }
        }
    }
}
