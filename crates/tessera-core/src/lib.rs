pub mod config;
pub mod log;
pub mod rect;

pub use config::Config;
pub use log::LogConfig;
pub use rect::Rectangle;

/// Loads `config.toml` and starts the file logger it describes.
///
/// Returns the loaded configuration so callers can keep using it.
pub fn init() -> Config {
    let config = config::load();
    log::init(&config.logging);
    crate::log_info!(
        "tessera-core {} initialised (log level {})",
        env!("CARGO_PKG_VERSION"),
        config.logging.level
    );
    if let Some(path) = config::config_path() {
        crate::log_debug!("config file: {}", path.display());
    }
    config
}
