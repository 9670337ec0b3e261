//! Domain layer - Diary models

pub mod badge;
pub mod emotion;
pub mod entry;

pub use badge::Badge;
pub use emotion::{Emotion, EmotionCounts};
pub use entry::{DiaryEntry, DATE_FORMAT};
