mod loader;

use serde::{Deserialize, Serialize};

use crate::log::{Level, LogConfig};

pub use loader::{config_dir, config_path, load, load_from, parse, try_load, try_load_from};

/// Largest accepted `logging.max_file_mb`.
const MAX_LOG_FILE_MB: u64 = 1024;

/// Top-level configuration for Tessera.
///
/// Loaded from `~/.config/tessera/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging settings.
    pub logging: LogConfig,
}

impl Config {
    /// Clamps values to safe ranges and normalises the log level name.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.min(MAX_LOG_FILE_MB);
        self.logging.level = Level::parse(&self.logging.level)
            .as_str()
            .to_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests;
