//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod surface;

pub use config::{default_log_level, ConfigError, LogConfig};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::note::{normalize_note_content, Note, NoteId};
pub use repo::note_list::{NoteList, NoteListError, NoteListResult};
pub use service::note_board::{Key, NoteBoard, Outcome, Trigger};
pub use surface::{DeleteTrigger, MemorySurface, NoteSurface, RenderedEntry, EMPTY_INPUT_WARNING};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
