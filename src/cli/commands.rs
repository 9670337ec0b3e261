//! CLI argument definitions

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Personal mood diary for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (keys: separator, log_level)
    #[arg(short, long, value_name = "PATH", env = "DIARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of the local date
    #[arg(long, value_name = "DATE", env = "DIARY_TODAY", hide = true)]
    pub today: Option<NaiveDate>,
}
