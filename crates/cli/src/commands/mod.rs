pub mod batch;
pub mod config_cmd;
pub mod demo;
pub mod dispatch;
pub mod doctor;

use recruitem_config::{AppConfig, ConfigError};
use std::path::{Path, PathBuf};

/// Load configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => AppConfig::load_with_env(p),
        None => AppConfig::load(),
    }
}

/// The file `load_config` reads for `path`.
pub fn config_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"))
}
