//! Bounded log of finished games, newest first.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use noughts_rules::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Number of finished games kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sequence number within the session, starting at 1.
    id: u64,
    /// How the game ended.
    outcome: Outcome,
    /// When the game ended.
    finished_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(id: u64, outcome: Outcome) -> Self {
        Self::at(id, outcome, Utc::now())
    }

    /// Creates an entry with an explicit finish time.
    pub fn at(id: u64, outcome: Outcome, finished_at: DateTime<Utc>) -> Self {
        Self {
            id,
            outcome,
            finished_at,
        }
    }
}

/// Most recent finished games, newest first, capped at a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log holding at most `capacity` entries (at least 1).
    ///
    /// Storage grows with use; `capacity` only bounds the length.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Adds `entry` as the newest, dropping the oldest past capacity.
    #[instrument(skip(self), fields(capacity = self.capacity))]
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
            debug!("Dropped oldest history entry");
        }
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
