//! Render surface contract between `NoteBoard` and its host.
//!
//! # Responsibility
//! - Describe what a host must draw: entries, input reset, warnings.
//! - Carry delete wiring as plain values bound to a note identity.
//!
//! # Invariants
//! - Each rendered entry exposes exactly one `DeleteTrigger`.
//! - A surface never mutates notes; it only mirrors what the board tells it.

use crate::model::note::{Note, NoteId};

/// Warning shown when the user submits blank text.
pub const EMPTY_INPUT_WARNING: &str = "Please write something before adding a note!";

/// Delete action bound to one rendered entry.
///
/// Hosts keep this value next to the visible block and hand it back to
/// `NoteBoard::delete` when the user activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeleteTrigger {
    target: NoteId,
}

impl DeleteTrigger {
    pub(crate) fn bound_to(target: NoteId) -> Self {
        Self { target }
    }

    /// Identity of the note this trigger removes.
    pub fn target(&self) -> NoteId {
        self.target
    }
}

/// One visible block as handed to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub id: NoteId,
    pub content: String,
    pub delete: DeleteTrigger,
}

impl RenderedEntry {
    pub(crate) fn for_note(note: &Note) -> Self {
        Self {
            id: note.id(),
            content: note.content().to_string(),
            delete: DeleteTrigger::bound_to(note.id()),
        }
    }
}

/// Host-side drawing operations.
pub trait NoteSurface {
    /// Appends a visible block at the end of the list.
    fn insert_entry(&mut self, entry: &RenderedEntry);
    /// Removes the visible block for `id`.
    fn remove_entry(&mut self, id: NoteId);
    /// Resets the text input to empty.
    fn clear_input(&mut self);
    /// Shows a blocking notification.
    fn warn(&mut self, message: &str);
}

/// Headless surface that records everything it is told.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    entries: Vec<RenderedEntry>,
    warnings: Vec<String>,
    input_clears: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    /// Entry texts in display order.
    pub fn contents(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.content.as_str()).collect()
    }

    /// Delete trigger of the entry at `index` (display order).
    pub fn delete_trigger(&self, index: usize) -> Option<DeleteTrigger> {
        self.entries.get(index).map(|entry| entry.delete)
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn input_clears(&self) -> usize {
        self.input_clears
    }
}

impl NoteSurface for MemorySurface {
    fn insert_entry(&mut self, entry: &RenderedEntry) {
        self.entries.push(entry.clone());
    }

    fn remove_entry(&mut self, id: NoteId) {
        self.entries.retain(|entry| entry.id != id);
    }

    fn clear_input(&mut self) {
        self.input_clears += 1;
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
