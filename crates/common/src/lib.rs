//! # Common syncwrap
//!
//! Shared error definitions and configuration plumbing for the syncwrap
//! crates.
//!
//! ## Key Features
//! - Error handling with the `SyncwrapError` trait
//! - Layered settings loading (defaults, TOML file, environment)
//! - Shared configuration validation contract
//!
//! ## Design Principles
//! - thiserror for library errors, anyhow at the binary boundary
//! - Minimal dependencies to avoid bloat in dependent crates

pub mod config;
pub mod error;

// Re-export commonly used types at the crate root for convenience
pub use config::*;
pub use error::*;

/// Version of the common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
