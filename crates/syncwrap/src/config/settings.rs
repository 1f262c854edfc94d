//! Launcher settings
//!
//! Startup-injected constants: image reference, container name, docker
//! endpoint and mount target roots. Loaded through the layered loader in
//! `common` and validated before use.

use clap::ValueEnum;
use common::config::ConfigValidation;
use common::error::ConfigurationError;
use serde::{Deserialize, Serialize};

use super::validation::contains_quote;

/// Launch strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStrategy {
    /// Shell out to the docker CLI
    Command,
    /// Talk to the daemon API directly
    Api,
}

/// Top-level launcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Image reference to run
    pub image: String,

    /// Name given to the launched container
    pub container_name: String,

    /// Default launch strategy (`--strategy` overrides)
    pub strategy: LaunchStrategy,

    /// Remove the container once it exits
    pub auto_remove: bool,

    /// Docker endpoint settings
    pub docker: DockerSettings,

    /// Mount target settings
    pub mount: MountSettings,
}

/// Docker endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerSettings {
    /// CLI binary used by the command strategy
    pub binary: String,

    /// Daemon socket used by the API strategy
    pub socket_path: String,
}

/// Mount target settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSettings {
    /// Directory under which folder mounts are placed
    pub folder_root: String,

    /// Target path of the storage mount
    pub storage_target: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            image: "sync:slim".to_string(),
            container_name: "Sync".to_string(),
            strategy: LaunchStrategy::Command,
            auto_remove: true,
            docker: DockerSettings::default(),
            mount: MountSettings::default(),
        }
    }
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            socket_path: "/var/run/docker.sock".to_string(),
        }
    }
}

impl Default for MountSettings {
    fn default() -> Self {
        Self {
            folder_root: "/mnt/folders".to_string(),
            storage_target: "/mnt/config".to_string(),
        }
    }
}

impl ConfigValidation for LauncherSettings {
    type Error = ConfigurationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.image.is_empty() {
            return Err(ConfigurationError::InvalidValue {
                key: "image".to_string(),
                value: self.image.clone(),
                reason: "image reference must not be empty".to_string(),
            });
        }

        if self.container_name.is_empty() || contains_quote(&self.container_name) {
            return Err(ConfigurationError::InvalidValue {
                key: "container_name".to_string(),
                value: self.container_name.clone(),
                reason: "container name must be non-empty and quote-free".to_string(),
            });
        }

        if self.docker.binary.is_empty() {
            return Err(ConfigurationError::InvalidValue {
                key: "docker.binary".to_string(),
                value: self.docker.binary.clone(),
                reason: "docker binary must not be empty".to_string(),
            });
        }

        if !self.mount.folder_root.starts_with('/') {
            return Err(ConfigurationError::InvalidValue {
                key: "mount.folder_root".to_string(),
                value: self.mount.folder_root.clone(),
                reason: "mount targets must be absolute paths".to_string(),
            });
        }

        if !self.mount.storage_target.starts_with('/') {
            return Err(ConfigurationError::InvalidValue {
                key: "mount.storage_target".to_string(),
                value: self.mount.storage_target.clone(),
                reason: "mount targets must be absolute paths".to_string(),
            });
        }

        Ok(())
    }

    fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.auto_remove {
            warnings
                .push("auto_remove is disabled; exited containers will accumulate".to_string());
        }

        warnings
    }
}
