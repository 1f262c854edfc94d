//! Container launch strategies
//!
//! A [`LaunchPlan`] is derived once from the validated configuration and
//! handed to one of two interchangeable launchers: the docker CLI wrapper
//! or the daemon API client.

pub mod api;
pub mod command;

pub use api::ApiLauncher;
pub use command::CommandLauncher;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{LauncherSettings, SyncConfig};
use crate::mounts::{derive_mounts, BindMount};
use common::error::SyncwrapError;

/// Launch failures from either strategy
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The docker CLI could not be spawned
    #[error("Failed to spawn {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The docker CLI exited unsuccessfully
    #[error("{binary} exited with {status}")]
    CommandFailed {
        binary: String,
        status: std::process::ExitStatus,
    },

    /// A daemon API call failed
    #[error("Docker API error: {0}")]
    Api(#[from] bollard::errors::Error),
}

impl SyncwrapError for LaunchError {}

/// Everything a launcher needs to start the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Fixed container name
    pub container_name: String,
    /// Image reference
    pub image: String,
    /// Bind mounts, storage mount last
    pub mounts: Vec<BindMount>,
    /// Network to attach to, if any
    pub network: Option<String>,
    /// Static IP inside `network`; never set without it
    pub ip: Option<String>,
    /// Environment variables in `KEY=value` form
    pub env: Vec<String>,
    /// Remove the container once it exits
    pub auto_remove: bool,
}

impl LaunchPlan {
    /// Derive the launch parameters for a validated configuration
    pub fn build(settings: &LauncherSettings, config: &SyncConfig) -> Self {
        Self {
            container_name: settings.container_name.clone(),
            image: settings.image.clone(),
            mounts: derive_mounts(config, &settings.mount),
            network: config.network_value().map(str::to_owned),
            ip: config.ip_value().map(str::to_owned),
            env: vec![
                format!("USERID={}", config.uid),
                format!("GROUPID={}", config.gid),
            ],
            auto_remove: settings.auto_remove,
        }
    }
}

/// A mechanism that starts the container described by a [`LaunchPlan`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Launcher {
    /// Start the container; the first failure aborts the launch
    async fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError>;
}
