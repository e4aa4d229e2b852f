//! Note board use-case service.
//!
//! # Responsibility
//! - Own the session's `NoteList`, current input text and host surface.
//! - Translate submit / key / delete triggers into list operations and the
//!   matching surface updates.
//!
//! # Invariants
//! - After every trigger the surface shows exactly the notes in the list,
//!   in the same order.
//! - Input is cleared only after a successful append.
//! - Only blank submissions produce a warning; unknown deletes are silent.

use crate::model::note::{Note, NoteId};
use crate::repo::note_list::{NoteList, NoteListError, NoteListResult};
use crate::surface::{DeleteTrigger, NoteSurface, RenderedEntry, EMPTY_INPUT_WARNING};
use log::{debug, info};

/// Key reported by the host while the input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// External event delivered to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Add button activation.
    Submit,
    /// Key press inside the input.
    KeyPress(Key),
    /// Delete button of one rendered entry.
    Delete(DeleteTrigger),
}

/// Result of dispatching one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(NoteId),
    Deleted(NoteId),
    Rejected(NoteListError),
    Ignored,
}

/// Application context for one widget instance.
pub struct NoteBoard<S: NoteSurface> {
    notes: NoteList,
    input: String,
    surface: S,
}

impl<S: NoteSurface> NoteBoard<S> {
    /// Creates an empty board drawing into `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            notes: NoteList::new(),
            input: String::new(),
            surface,
        }
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current input text as last reported by the host.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Records the host's current input value.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Appends the current input as a note.
    ///
    /// # Errors
    /// - `EmptyInput` when the input is blank. The surface is warned and the
    ///   input is left as typed.
    pub fn submit(&mut self) -> NoteListResult<NoteId> {
        let entry = match self.notes.append(&self.input) {
            Ok(note) => RenderedEntry::for_note(note),
            Err(err) => {
                info!("event=note_submit module=note_board status=rejected reason=empty_input");
                self.surface.warn(EMPTY_INPUT_WARNING);
                return Err(err);
            }
        };

        self.surface.insert_entry(&entry);
        self.input.clear();
        self.surface.clear_input();
        info!(
            "event=note_submit module=note_board status=ok id={} total={}",
            entry.id,
            self.notes.len()
        );
        Ok(entry.id)
    }

    /// Handles a key press in the input; only `Enter` submits.
    pub fn press_key(&mut self, key: Key) -> Option<NoteListResult<NoteId>> {
        match key {
            Key::Enter => Some(self.submit()),
            Key::Char(_) | Key::Other => None,
        }
    }

    /// Removes the note bound to `trigger` together with its entry.
    ///
    /// # Errors
    /// - `NotFound` when the note is already gone. Nothing is drawn.
    pub fn delete(&mut self, trigger: DeleteTrigger) -> NoteListResult<Note> {
        let id = trigger.target();
        match self.notes.delete(id) {
            Ok(note) => {
                self.surface.remove_entry(id);
                info!(
                    "event=note_delete module=note_board status=ok id={} total={}",
                    id,
                    self.notes.len()
                );
                Ok(note)
            }
            Err(err) => {
                debug!("event=note_delete module=note_board status=noop id={id}");
                Err(err)
            }
        }
    }

    /// Single entry point for host events.
    pub fn dispatch(&mut self, trigger: Trigger) -> Outcome {
        let result = match trigger {
            Trigger::Submit => self.submit().map(Outcome::Added),
            Trigger::KeyPress(key) => match self.press_key(key) {
                Some(result) => result.map(Outcome::Added),
                None => return Outcome::Ignored,
            },
            Trigger::Delete(trigger) => self.delete(trigger).map(|note| Outcome::Deleted(note.id())),
        };
        result.unwrap_or_else(Outcome::Rejected)
    }

    /// Consumes the board and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
