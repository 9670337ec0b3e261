//! Diary entry model

use super::Emotion;
use chrono::NaiveDate;

/// Format used to match entries by date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dated journal record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    date: NaiveDate,
    content: String,
    emotion: Emotion,
}

impl DiaryEntry {
    pub fn new(date: NaiveDate, content: impl Into<String>, emotion: Emotion) -> Self {
        DiaryEntry {
            date,
            content: content.into(),
            emotion,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Date rendered as YYYY-MM-DD
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
