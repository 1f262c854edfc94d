//! # syncwrap
//!
//! Reads a JSON document describing sync folders, storage, network
//! identity and user/group ids, validates it, derives bind mounts and
//! launches a single pre-built sync container, either through the docker
//! CLI or the daemon API.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod mounts;

use common::config::ConfigValidation;

pub use config::{LauncherSettings, SyncConfig};
pub use launcher::{LaunchPlan, Launcher};

/// Validate the configuration, derive the launch plan and start the
/// container. The launcher is only invoked when validation succeeds.
pub async fn run(
    config: &SyncConfig,
    settings: &LauncherSettings,
    launcher: &dyn Launcher,
) -> anyhow::Result<()> {
    config.validate()?;

    let plan = LaunchPlan::build(settings, config);
    launcher.launch(&plan).await?;

    Ok(())
}
