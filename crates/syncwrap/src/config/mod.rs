//! Configuration for the sync launcher
//!
//! Two inputs meet here: the JSON sync document given on the command line
//! and the TOML launcher settings resolved through `common`.

pub mod loader;
pub mod settings;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use loader::{load_sync_config, MAX_CONFIG_BYTES};
pub use settings::{DockerSettings, LaunchStrategy, LauncherSettings, MountSettings};
pub use types::SyncConfig;
pub use validation::ValidationError;
