//! Configuration loading
//!
//! Reads the TOML config file from the platform config directory
//! (`<config_dir>/reelfind/config.toml`). A missing file is not an error;
//! every field has a default.

mod types;

pub use types::{Config, SearchConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReelfindError;

/// Load configuration from `path`, or from the default location when `None`.
///
/// A missing file at the default location yields `Config::default()`. An
/// explicitly requested file that does not exist is an error, since the user
/// asked for it by name.
pub fn load(path: Option<&Path>) -> Result<Config, ReelfindError> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ReelfindError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|e| ReelfindError::Config(e.to_string()))
}

/// Default config file location: `<config_dir>/reelfind/config.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reelfind").join("config.toml"))
}
