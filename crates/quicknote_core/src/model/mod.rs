//! Domain model for the note widget.
//!
//! # Responsibility
//! - Define the note record and its opaque identity.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is never reused.
//! - Notes are immutable; deletion removes them outright.

pub mod note;
