//! Output formatting utilities

use crate::domain::{Badge, DiaryEntry, EmotionCounts};

/// Render a single entry
pub fn format_entry(entry: &DiaryEntry) -> String {
    format!(
        "Date: {}\nEmotion: {}\nContent:\n{}",
        entry.date_string(),
        entry.emotion(),
        entry.content()
    )
}

/// Render every entry, each followed by `separator`
pub fn format_entry_list(entries: &[DiaryEntry], separator: &str) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
        output.push_str(separator);
        output.push('\n');
    }
    output
}

/// Render per-emotion counts, one line each
pub fn format_mood_summary(counts: &EmotionCounts) -> String {
    if counts.total() == 0 {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (emotion, count) in counts.iter() {
        output.push_str(&format!("{:<8} {}\n", emotion, count));
    }
    output
}

/// Render earned badges, one per line
pub fn format_badge_list(badges: &[Badge]) -> String {
    if badges.is_empty() {
        return "No badges yet".to_string();
    }

    let mut output = String::new();
    for badge in badges {
        output.push_str(&format!("* {}\n", badge));
    }
    output
}
