//! In-memory, insertion-ordered diary entry store

use crate::domain::{DiaryEntry, EmotionCounts};
use chrono::NaiveDate;

/// Append-only sequence of diary entries
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<DiaryEntry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        EntryStore::default()
    }

    /// Append an entry. No validation happens here.
    pub fn add_entry(&mut self, entry: DiaryEntry) {
        self.entries.push(entry);
    }

    /// Find the first entry (in insertion order) whose YYYY-MM-DD date equals `date`.
    /// Later entries sharing that date are not reachable through this lookup.
    pub fn search_by_date(&self, date: &str) -> Option<&DiaryEntry> {
        self.entries.iter().find(|entry| entry.date_string() == date)
    }

    /// Read-only view of every entry in insertion order
    pub fn all_entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Tally entries per emotion, counting only those dated on or after `since`
    pub fn emotion_counts_since(&self, since: NaiveDate) -> EmotionCounts {
        self.entries
            .iter()
            .filter(|entry| entry.date() >= since)
            .fold(EmotionCounts::default(), |mut counts, entry| {
                counts.record(entry.emotion());
                counts
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
