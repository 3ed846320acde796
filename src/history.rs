//! Session scrollback
//!
//! An in-memory, append-only log of executed entries. Insertion order is
//! render order; entries are never reordered or deduplicated. The only other
//! mutation is a full reset when the user runs `clear`.

use crate::models::ExecutedEntry;

/// Ordered log of executed entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    entries: Vec<ExecutedEntry>,
}

impl HistoryBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding only the synthetic welcome entry
    pub fn with_welcome() -> Self {
        Self {
            entries: vec![ExecutedEntry::welcome()],
        }
    }

    /// Add an entry at the end
    pub fn append(&mut self, entry: ExecutedEntry) {
        self.entries.push(entry);
    }

    /// Drop every entry
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Input of the most recent entry, unless that entry is the welcome banner
    ///
    /// Only the single latest entry is considered; there is no walking back
    /// through older inputs.
    pub fn last_non_welcome_input(&self) -> Option<&str> {
        self.entries
            .last()
            .filter(|entry| !entry.is_welcome())
            .map(ExecutedEntry::input_line)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[ExecutedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutedEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&ExecutedEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = &'a ExecutedEntry;
    type IntoIter = std::slice::Iter<'a, ExecutedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
