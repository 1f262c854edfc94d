//! Sync configuration validation
//!
//! Ordered checks over [`SyncConfig`]; the first violation wins. The quote
//! check is a narrow command-injection heuristic, not a sanitizer.

use common::config::ConfigValidation;
use common::error::SyncwrapError;
use thiserror::Error;

use super::types::SyncConfig;

/// Characters rejected by the injection heuristic
const QUOTE_CHARS: &[char] = &['"', '\''];

/// Validation failures for a sync configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    #[error("'{field}' field is required")]
    MissingField { field: &'static str },

    /// The injection heuristic tripped on a field value
    #[error("Possible command-line injection found in '{field}'")]
    SuspiciousValue { field: &'static str },

    /// A field is only valid together with another one
    #[error("The field '{field}' requires '{requires}'")]
    MissingCompanion {
        field: &'static str,
        requires: &'static str,
    },

    /// Uid and Gid must both be present and non-zero
    #[error("The fields 'Uid' and 'Gid' are required and must be non-zero")]
    MissingIdentity,
}

impl SyncwrapError for ValidationError {}

/// True when the value trips the injection heuristic
pub(crate) fn contains_quote(input: &str) -> bool {
    input.contains(QUOTE_CHARS)
}

impl ConfigValidation for SyncConfig {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.storage.is_empty() {
            return Err(ValidationError::MissingField { field: "Storage" });
        }
        if contains_quote(&self.storage) {
            return Err(ValidationError::SuspiciousValue { field: "Storage" });
        }

        // A static IP only makes sense inside a named network
        if self.ip_value().is_some() && self.network_value().is_none() {
            return Err(ValidationError::MissingCompanion {
                field: "Ip",
                requires: "Network",
            });
        }
        if self.ip.as_deref().is_some_and(contains_quote) {
            return Err(ValidationError::SuspiciousValue { field: "Ip" });
        }
        if self.network.as_deref().is_some_and(contains_quote) {
            return Err(ValidationError::SuspiciousValue { field: "Network" });
        }

        for folder in &self.folders {
            if contains_quote(folder) {
                return Err(ValidationError::SuspiciousValue { field: "Folders" });
            }
        }

        if self.uid == 0 || self.gid == 0 {
            return Err(ValidationError::MissingIdentity);
        }

        Ok(())
    }
}
