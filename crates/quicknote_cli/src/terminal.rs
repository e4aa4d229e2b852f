//! Terminal render surface.
//!
//! # Responsibility
//! - Draw entries, warnings and input resets as plain text lines.
//! - Keep the table mapping visible entry numbers to delete triggers.
//!
//! # Invariants
//! - `entries` mirrors the on-screen list order.
//! - Write failures are kept until the host loop collects them.

use quicknote_core::{DeleteTrigger, NoteId, NoteSurface, RenderedEntry};
use std::io::{self, Write};

pub struct TerminalSurface<W: Write> {
    out: W,
    entries: Vec<RenderedEntry>,
    pending_error: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
            pending_error: None,
        }
    }

    /// Delete trigger for the 1-based entry number shown on screen.
    pub fn delete_trigger(&self, number: usize) -> Option<DeleteTrigger> {
        number
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.delete)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Prints the whole list.
    pub fn redraw(&mut self) {
        let result = if self.entries.is_empty() {
            writeln!(self.out, "(no notes)")
        } else {
            self.entries
                .iter()
                .enumerate()
                .try_for_each(|(index, entry)| write_entry(&mut self.out, index + 1, entry))
        };
        self.record(result);
    }

    /// Prints a free-form line (help, parse errors).
    pub fn say(&mut self, message: &str) {
        let result = writeln!(self.out, "{message}");
        self.record(result);
    }

    pub fn prompt(&mut self) {
        let result = write!(self.out, "> ").and_then(|()| self.out.flush());
        self.record(result);
    }

    /// Returns the first write failure since the last call.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.pending_error.take()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.pending_error.get_or_insert(err);
        }
    }
}

impl<W: Write> NoteSurface for TerminalSurface<W> {
    fn insert_entry(&mut self, entry: &RenderedEntry) {
        self.entries.push(entry.clone());
        let number = self.entries.len();
        let result = write_entry(&mut self.out, number, entry);
        self.record(result);
    }

    fn remove_entry(&mut self, id: NoteId) {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return;
        };
        let removed = self.entries.remove(index);
        let result = writeln!(
            self.out,
            "  deleted #{}: {}",
            index + 1,
            first_line(&removed.content)
        );
        self.record(result);
    }

    // The prompt line is consumed when read.
    fn clear_input(&mut self) {}

    fn warn(&mut self, message: &str) {
        let result = writeln!(self.out, "! {message}");
        self.record(result);
    }
}

fn write_entry<W: Write>(out: &mut W, number: usize, entry: &RenderedEntry) -> io::Result<()> {
    let mut lines = entry.content.lines();
    writeln!(out, "[{number}] {}  [delete: /delete {number}]", lines.next().unwrap_or(""))?;
    for line in lines {
        writeln!(out, "    {line}")?;
    }
    Ok(())
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::TerminalSurface;
    use quicknote_core::{NoteBoard, NoteSurface};

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn entries_are_numbered_and_deletable_by_number() {
        let mut board = NoteBoard::new(TerminalSurface::new(Vec::new()));
        board.set_input("Buy milk");
        board.submit().unwrap();
        board.set_input("Call mom");
        board.submit().unwrap();

        let trigger = board.surface().delete_trigger(1).unwrap();
        board.delete(trigger).unwrap();
        assert_eq!(board.surface().entry_count(), 1);
        assert!(board.surface().delete_trigger(2).is_none());
        assert!(board.surface().delete_trigger(0).is_none());

        let text = output(board.into_surface());
        assert!(text.contains("[1] Buy milk"));
        assert!(text.contains("[2] Call mom"));
        assert!(text.contains("deleted #1: Buy milk"));
    }

    #[test]
    fn redraw_lists_multiline_notes_indented() {
        let mut board = NoteBoard::new(TerminalSurface::new(Vec::new()));
        board.set_input("groceries\nmilk");
        board.submit().unwrap();
        board.surface_mut().redraw();

        let text = output(board.into_surface());
        assert!(text.contains("[1] groceries  [delete: /delete 1]\n    milk\n"));
    }

    #[test]
    fn warn_is_prefixed() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.warn("careful");
        assert_eq!(output(surface), "! careful\n");
    }

    #[test]
    fn empty_list_redraw_says_so() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.redraw();
        assert!(surface.take_error().is_none());
        assert_eq!(output(surface), "(no notes)\n");
    }
}
