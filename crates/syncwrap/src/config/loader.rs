//! Sync configuration loading
//!
//! Reads the JSON document and parses it into a [`SyncConfig`]. Some
//! exports of the sync tooling write NUL bytes where line breaks belong,
//! which serde_json rejects, so NULs are replaced with spaces first.

use common::error::ConfigurationError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use super::types::SyncConfig;

/// Upper bound on the config document size
pub const MAX_CONFIG_BYTES: usize = 64 * 1024;

/// Load and parse a sync configuration file
///
/// Files larger than [`MAX_CONFIG_BYTES`] are rejected outright rather
/// than truncated.
pub fn load_sync_config(path: &Path) -> Result<SyncConfig, ConfigurationError> {
    let mut raw = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConfigurationError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ConfigurationError::ReadError {
            path: path.display().to_string(),
            source: Box::new(err),
        },
    })?;

    if raw.len() > MAX_CONFIG_BYTES {
        return Err(ConfigurationError::FileTooLarge {
            path: path.display().to_string(),
            max_bytes: MAX_CONFIG_BYTES,
        });
    }

    for byte in raw.iter_mut() {
        if *byte == b'\0' {
            *byte = b' ';
        }
    }

    let config: SyncConfig =
        serde_json::from_slice(&raw).map_err(|err| ConfigurationError::ParseError {
            details: format!("{}: {err}", path.display()),
        })?;

    debug!(folders = config.folders.len(), "parsed sync configuration");
    Ok(config)
}
