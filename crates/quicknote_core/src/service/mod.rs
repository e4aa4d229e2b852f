//! Core use-case services.
//!
//! # Responsibility
//! - Wire host triggers to note list operations and surface updates.
//! - Keep hosts decoupled from list internals.

pub mod note_board;
