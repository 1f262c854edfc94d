//! # Configuration Traits
//!
//! Shared validation contract for configuration types.

use crate::error::SyncwrapError;

/// Common configuration validation trait
pub trait ConfigValidation {
    type Error: SyncwrapError;

    /// Validate the configuration
    fn validate(&self) -> Result<(), Self::Error>;

    /// Get configuration warnings (non-fatal issues)
    fn warnings(&self) -> Vec<String> {
        Vec::new()
    }
}
