//! Milestone badges awarded for writing entries

use std::fmt;

/// Badge earned once a user has written enough entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    FirstEntry,
    TenEntries,
}

impl Badge {
    /// All badges, in the order they are earned
    pub const ALL: [Badge; 2] = [Badge::FirstEntry, Badge::TenEntries];

    /// Entries a user must have written to hold this badge
    pub fn threshold(&self) -> usize {
        match self {
            Badge::FirstEntry => 1,
            Badge::TenEntries => 10,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Badge::FirstEntry => "First Entry",
            Badge::TenEntries => "Wrote 10 Entries",
        }
    }

    /// Badges held after writing `written` entries
    pub fn earned(written: usize) -> Vec<Badge> {
        Badge::ALL
            .into_iter()
            .filter(|badge| written >= badge.threshold())
            .collect()
    }

    /// Badge unlocked by exactly the `written`-th entry, if any
    pub fn unlocked_at(written: usize) -> Option<Badge> {
        Badge::ALL
            .into_iter()
            .find(|badge| badge.threshold() == written)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
