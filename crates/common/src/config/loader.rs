//! # Settings Loader
//!
//! Figment-based layered loading for launcher settings:
//! 1. Compiled defaults
//! 2. TOML settings file
//! 3. Environment variable overrides (`SYNCWRAP_*`)
//!
//! Nested fields map to double underscores, e.g. `SYNCWRAP_DOCKER__BINARY`.

use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default settings file name looked up in the working directory
const DEFAULT_SETTINGS_FILE: &str = "syncwrap.toml";

/// Environment variable prefix
const ENV_PREFIX: &str = "SYNCWRAP";

/// Well-known settings locations checked after the working directory
const SETTINGS_LOCATIONS: &[&str] = &[
    "/etc/syncwrap/config.toml",
    "~/.config/syncwrap/config.toml",
];

/// Load settings with the layered approach
///
/// # Arguments
/// * `path_override` - Explicit settings file; when given, the file must
///   exist. Without it, `SYNCWRAP_SETTINGS_PATH` and the well-known
///   locations are consulted, and a missing file falls back to defaults.
///
/// # Layer priority (highest to lowest)
/// 1. Environment variables (`SYNCWRAP_*`)
/// 2. Settings file
/// 3. Compiled defaults
pub fn load_settings<T>(path_override: Option<&Path>) -> Result<T, ConfigurationError>
where
    T: Default + DeserializeOwned + Serialize,
{
    let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

    let explicit = match path_override {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var(format!("{ENV_PREFIX}_SETTINGS_PATH"))
            .ok()
            .map(PathBuf::from),
    };

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("loading settings from {}", path.display());
        figment = figment.merge(Toml::file(&path));
    } else if let Some(path) = discover_settings_file()? {
        debug!("loading settings from {}", path.display());
        figment = figment.merge(Toml::file(&path));
    } else {
        debug!("no settings file found, using defaults");
    }

    figment = figment.merge(
        Env::prefixed(&format!("{ENV_PREFIX}_"))
            .split("__")
            .ignore(&["SETTINGS_PATH", "PATH", "HOME", "USER"]),
    );

    figment
        .extract()
        .map_err(|err| ConfigurationError::ParseError {
            details: format!("Failed to parse settings: {err}"),
        })
}

/// Find a settings file in the working directory or a well-known location
fn discover_settings_file() -> Result<Option<PathBuf>, ConfigurationError> {
    let current_dir =
        std::env::current_dir().map_err(|e| ConfigurationError::EnvironmentError {
            var: "current_dir".to_string(),
            details: e.to_string(),
        })?;

    let local = current_dir.join(DEFAULT_SETTINGS_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    for location in SETTINGS_LOCATIONS {
        let path = expand_tilde(location)?;
        if path.exists() {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Expand a leading tilde using `HOME`
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigurationError> {
    if let Some(rest) = path.strip_prefix('~') {
        let home = std::env::var("HOME").map_err(|_| ConfigurationError::EnvironmentError {
            var: "HOME".to_string(),
            details: "HOME environment variable not set".to_string(),
        })?;
        return Ok(PathBuf::from(format!("{home}{rest}")));
    }
    Ok(PathBuf::from(path))
}
