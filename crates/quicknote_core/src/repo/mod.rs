//! Note storage for the widget session.
//!
//! # Responsibility
//! - Hold the ordered note collection behind its two mutations.
//! - Report semantic errors (`EmptyInput`, `NotFound`) instead of panicking.
//!
//! # Invariants
//! - Storage is in-memory and lives as long as its owning `NoteBoard`.

pub mod note_list;
