//! Configuration management

use crate::error::{DiaryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use super::logging;

pub const DEFAULT_SEPARATOR: &str = "-------------------";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Line printed after each entry when listing all entries
    pub separator: String,
    /// Tracing filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: DEFAULT_SEPARATOR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from an optional TOML file, falling back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file. Missing keys take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DiaryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a `log_level` the tracing filter cannot parse
    pub fn validate(&self) -> Result<()> {
        logging::build_filter(&self.log_level)?;
        Ok(())
    }
}
