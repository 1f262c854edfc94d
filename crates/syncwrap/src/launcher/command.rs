//! Docker CLI launch strategy

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::{LaunchError, LaunchPlan, Launcher};
use crate::config::DockerSettings;

/// Launches the container by shelling out to the docker CLI
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    docker: DockerSettings,
}

impl CommandLauncher {
    pub fn new(docker: DockerSettings) -> Self {
        Self { docker }
    }

    /// Argument list for `docker run`, image always last
    pub fn build_args(plan: &LaunchPlan) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "--name".to_string(),
            plan.container_name.clone(),
        ];

        if plan.auto_remove {
            args.push("--rm".to_string());
        }

        for mount in &plan.mounts {
            args.push(format!("--volume={}:{}", mount.source, mount.target));
        }

        if let Some(network) = &plan.network {
            args.push(format!("--net={network}"));
            if let Some(ip) = &plan.ip {
                args.push(format!("--ip={ip}"));
            }
        }

        for var in &plan.env {
            args.push(format!("--env={var}"));
        }

        // Detach and name the image last
        args.push("-d".to_string());
        args.push(plan.image.clone());

        args
    }
}

#[async_trait]
impl Launcher for CommandLauncher {
    async fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let args = Self::build_args(plan);
        debug!(binary = %self.docker.binary, ?args, "running docker CLI");

        let status = Command::new(&self.docker.binary)
            .args(&args)
            .status()
            .await
            .map_err(|source| LaunchError::Spawn {
                binary: self.docker.binary.clone(),
                source,
            })?;

        if !status.success() {
            return Err(LaunchError::CommandFailed {
                binary: self.docker.binary.clone(),
                status,
            });
        }

        info!(container = %plan.container_name, "container started via docker CLI");
        Ok(())
    }
}
