//! In-memory ordered note collection.
//!
//! # Responsibility
//! - Own every live `Note` and keep them in insertion order.
//! - Provide the only two mutations: append and delete-by-identity.
//!
//! # Invariants
//! - Every stored note has non-empty trimmed content.
//! - Identities are unique within the list.
//! - A failed operation leaves the list untouched.

use crate::model::note::{Note, NoteId};
use log::debug;
use thiserror::Error;

pub type NoteListResult<T> = Result<T, NoteListError>;

/// Errors returned by note list mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteListError {
    /// Submitted text was empty after trimming.
    #[error("note content is empty after trimming")]
    EmptyInput,
    /// No live note carries this identity.
    #[error("note not found: {0}")]
    NotFound(NoteId),
}

/// Ordered sequence of notes, oldest first.
#[derive(Debug, Default, Clone)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a note built from `raw` and returns it.
    ///
    /// # Errors
    /// - `EmptyInput` when `raw` is blank; the list is not modified.
    pub fn append(&mut self, raw: &str) -> NoteListResult<&Note> {
        let note = Note::from_raw(raw).ok_or(NoteListError::EmptyInput)?;
        debug!(
            "event=note_append module=note_list status=ok id={} chars={}",
            note.id(),
            note.content().chars().count()
        );
        self.notes.push(note);
        let index = self.notes.len() - 1;
        Ok(&self.notes[index])
    }

    /// Removes the note with `id` and hands it back.
    ///
    /// # Errors
    /// - `NotFound` when `id` was already deleted or never issued here.
    pub fn delete(&mut self, id: NoteId) -> NoteListResult<Note> {
        let index = self.position(id).ok_or(NoteListError::NotFound(id))?;
        let removed = self.notes.remove(index);
        debug!(
            "event=note_delete module=note_list status=ok id={} index={} remaining={}",
            id,
            index,
            self.notes.len()
        );
        Ok(removed)
    }

    /// Zero-based position of `id` in insertion order.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Note contents in list order.
    pub fn contents(&self) -> Vec<&str> {
        self.notes.iter().map(Note::content).collect()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
