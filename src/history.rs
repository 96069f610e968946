//! Linear undo/redo timeline.
//!
//! DESIGN
//! ======
//! The timeline is a `Vec` of entries plus a cursor. It is seeded with one
//! entry and can never become empty, so `current()` is total. Recording after
//! an undo truncates everything past the cursor before appending; the redo
//! branch is gone for good. Undo at the start and redo at the end are no-ops,
//! not errors.
//!
//! Entries are never merged. A host that wants one entry per word instead of
//! one per keystroke debounces before calling `record`.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::snapshot::Snapshot;

/// Undo/redo timeline over values of type `T` (snapshots by default).
#[derive(Debug, Clone)]
pub struct EditHistory<T = Snapshot> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> EditHistory<T> {
    /// Start a timeline holding only `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    /// Drop every entry after the cursor, append `entry`, and make it current.
    pub fn record(&mut self, entry: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// The entry at the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Step back one entry if possible, returning the (possibly unchanged) current entry.
    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one entry if possible, returning the (possibly unchanged) current entry.
    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Index of the current entry.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including any redo branch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the timeline is seeded at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}
