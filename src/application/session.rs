//! Diary session use case
//!
//! Owns both stores for the life of the process and gates entry writes
//! behind a successful login. Entries are global: every user sees them all.

use crate::domain::{Badge, DiaryEntry, Emotion, EmotionCounts};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{CredentialStore, EntryStore};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

/// Days of history covered by the mood summary
pub const MOOD_WINDOW_DAYS: u64 = 30;

/// A freshly stored entry and the badge it unlocked, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenEntry {
    pub entry: DiaryEntry,
    pub unlocked: Option<Badge>,
}

/// Service tying the credential and entry stores to a logged-in user
#[derive(Debug, Default)]
pub struct Session {
    credentials: CredentialStore,
    entries: EntryStore,
    current_user: Option<String>,
    written: HashMap<String, usize>,
}

impl Session {
    /// Create a session over empty stores
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session over existing stores
    pub fn with_stores(credentials: CredentialStore, entries: EntryStore) -> Self {
        Session {
            credentials,
            entries,
            current_user: None,
            written: HashMap::new(),
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn register(&mut self, username: &str, password: &str) -> bool {
        let created = self.credentials.register(username, password);
        if created {
            info!(username, "registered user");
        } else {
            debug!(username, "registration rejected: user exists");
        }
        created
    }

    /// Authenticate and, on success, make `username` the current user
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.credentials.login(username, password) {
            info!(username, "login succeeded");
            self.current_user = Some(username.to_string());
            true
        } else {
            debug!("login failed");
            false
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(username = %user, "logged out");
        }
    }

    /// Validate shell input and append a new entry dated `date`
    pub fn write_entry(
        &mut self,
        content: &str,
        emotion: &str,
        date: NaiveDate,
    ) -> Result<WrittenEntry> {
        let Some(user) = self.current_user.as_deref() else {
            return Err(DiaryError::NotLoggedIn);
        };
        if content.trim().is_empty() {
            return Err(DiaryError::EmptyContent);
        }
        let emotion = Emotion::from_str(emotion)?;

        let entry = DiaryEntry::new(date, content, emotion);
        self.entries.add_entry(entry.clone());
        info!(%date, %emotion, total = self.entries.len(), "diary entry added");

        let written = self.written.entry(user.to_string()).or_insert(0);
        *written += 1;
        let unlocked = Badge::unlocked_at(*written);
        if let Some(badge) = unlocked {
            info!(username = user, %badge, "badge earned");
        }

        Ok(WrittenEntry { entry, unlocked })
    }

    /// Number of entries written by `username` during this process
    pub fn entries_written_by(&self, username: &str) -> usize {
        self.written.get(username).copied().unwrap_or(0)
    }

    /// Badges held by the logged-in user; empty when logged out
    pub fn badges(&self) -> Vec<Badge> {
        self.current_user()
            .map(|user| Badge::earned(self.entries_written_by(user)))
            .unwrap_or_default()
    }

    pub fn find_entry(&self, date: &str) -> Option<&DiaryEntry> {
        let found = self.entries.search_by_date(date);
        debug!(date, found = found.is_some(), "searched entries by date");
        found
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.entries.all_entries()
    }

    /// Emotion counts for entries dated within the last `MOOD_WINDOW_DAYS` days of `today`
    pub fn mood_summary(&self, today: NaiveDate) -> EmotionCounts {
        let since = today
            .checked_sub_days(Days::new(MOOD_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        self.entries.emotion_counts_since(since)
    }
}
