//! CLI layer - Command-line interface and interactive shell

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::Cli;
pub use output::{format_badge_list, format_entry, format_entry_list, format_mood_summary};
pub use shell::Shell;
