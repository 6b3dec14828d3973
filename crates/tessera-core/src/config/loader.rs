use std::io;
use std::path::{Path, PathBuf};

use super::Config;

/// Returns the config directory: `~/.config/tessera/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("tessera"))
}

/// Returns the config file path: `~/.config/tessera/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses a TOML document into a validated [`Config`].
pub fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    try_load_from(&path)
}

/// Like [`try_load`], reading from an explicit path.
pub fn try_load_from(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are printed.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Like [`load`], reading from an explicit path.
pub fn load_from(path: &Path) -> Config {
    let result = match std::fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
        Err(e) => Err(e.to_string()),
    };
    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}: {e}", path.display());
            Config::default()
        }
    }
}
