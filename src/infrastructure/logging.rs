//! Tracing subscriber setup
//!
//! Logs go to stderr; stdout belongs to the interactive session.

use crate::error::{DiaryError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the configured level
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, configured: &str) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Parse a filter directive, reporting which one was rejected
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        DiaryError::Config(format!("Invalid log filter '{}': {}", directive, e))
    })
}

/// Install the global subscriber
pub fn init(verbose: bool, configured: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, configured);
    let filter = build_filter(&directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| DiaryError::Config(format!("Failed to install logger: {}", e)))
}
