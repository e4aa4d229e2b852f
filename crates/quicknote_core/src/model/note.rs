//! Note domain model.
//!
//! # Responsibility
//! - Define the immutable record held by `NoteList`.
//! - Own the content normalization rule applied before a note exists.
//!
//! # Invariants
//! - `id` is generated once and never reused for another note.
//! - `content` is never empty and never starts or ends with whitespace.
//! - A note is never mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identity of one note.
///
/// Issued by `NoteList::append` and used to address the note for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generates a fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-authored text entry.
///
/// Serialize-only: notes are created through `NoteList::append`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    content: String,
}

impl Note {
    /// Builds a note from raw input, or `None` when nothing is left after
    /// trimming.
    pub(crate) fn from_raw(raw: &str) -> Option<Self> {
        let content = normalize_note_content(raw)?;
        Some(Self {
            id: NoteId::generate(),
            content,
        })
    }

    /// Stable identity of this note.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Trimmed note text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Trims surrounding whitespace and returns the remaining text, if any.
///
/// Whitespace is the Unicode `White_Space` set minus U+0085 (NEL), plus
/// U+FEFF (byte-order mark); the same set a browser `trim()` removes.
/// Interior whitespace, including newlines, is kept as typed.
pub fn normalize_note_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(is_trim_char);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_trim_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
