//! Emotion tags attached to diary entries

use crate::error::DiaryError;
use std::fmt;
use std::str::FromStr;

/// Mood recorded with a diary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
}

impl Emotion {
    /// All emotions, in display order
    pub const ALL: [Emotion; 3] = [Emotion::Happy, Emotion::Sad, Emotion::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(DiaryError::InvalidEmotion(s.trim().to_string())),
        }
    }
}

/// Number of entries recorded per emotion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionCounts {
    pub happy: usize,
    pub sad: usize,
    pub neutral: usize,
}

impl EmotionCounts {
    pub fn record(&mut self, emotion: Emotion) {
        match emotion {
            Emotion::Happy => self.happy += 1,
            Emotion::Sad => self.sad += 1,
            Emotion::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, emotion: Emotion) -> usize {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.happy + self.sad + self.neutral
    }

    /// Counts paired with their emotion, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }
}
