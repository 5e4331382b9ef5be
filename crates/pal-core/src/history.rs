//! History log - bounded, most-recent-first record of past checks
//!
//! Session state only: the log lives and dies with its session. Updates
//! are prepend-and-evict (newest first, oldest dropped past capacity);
//! entries are never mutated after creation. Clearing resets to empty
//! unconditionally. Both operations are total.

use crate::checker::Verdict;

/// One recorded check: the original input and its verdict
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    /// The text exactly as the user submitted it
    pub input: String,
    /// The verdict the checker reached
    pub status: Verdict,
}

/// Bounded, most-recent-first log of past checks
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Maximum number of entries retained; the oldest is evicted beyond this
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        HistoryLog {
            entries: Vec::new(),
        }
    }

    /// Record a check: prepend the entry, then truncate to capacity.
    ///
    /// Repeated identical inputs each get their own entry; there is no
    /// deduplication.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::CAPACITY);
    }

    /// Reset to an empty log unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in most-recent-first order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
