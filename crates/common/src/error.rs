//! Error handling for syncwrap
//!
//! Library errors are concrete `thiserror` enums; the binary boundary uses
//! `anyhow`. Every error enum implements the `SyncwrapError` marker trait so
//! shared abstractions (e.g. `ConfigValidation`) can bound on it.

use thiserror::Error;

/// Base trait for all syncwrap-specific errors
///
/// Ensures errors are thread-safe, have a static lifetime, and implement
/// the standard `Error` trait.
pub trait SyncwrapError: std::error::Error + Send + Sync + 'static {}

/// Configuration-related errors
///
/// Raised while locating, reading, or parsing configuration input: the
/// launcher settings TOML or the sync JSON document.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration file cannot be read
    #[error("Cannot read configuration file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration file exceeds the read limit
    #[error("Configuration file {path} exceeds {max_bytes} bytes")]
    FileTooLarge { path: String, max_bytes: usize },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Environment variable error
    #[error("Environment variable error for {var}: {details}")]
    EnvironmentError { var: String, details: String },
}

impl SyncwrapError for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::FileNotFound {
            path: "/etc/syncwrap/config.toml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /etc/syncwrap/config.toml"
        );

        let err = ConfigurationError::FileTooLarge {
            path: "big.json".to_string(),
            max_bytes: 65536,
        };
        assert_eq!(err.to_string(), "Configuration file big.json exceeds 65536 bytes");
    }
}
