//! Docker daemon API launch strategy

use std::collections::HashMap;

use async_trait::async_trait;
use bollard::container::{
    Config, CreateContainerOptions, NetworkingConfig, StartContainerOptions,
};
use bollard::models::{EndpointIpamConfig, EndpointSettings, HostConfig, Mount, MountTypeEnum};
use bollard::Docker;
use tracing::{debug, info};

use super::{LaunchError, LaunchPlan, Launcher};
use crate::config::DockerSettings;

/// Launches the container through the daemon API
#[derive(Debug, Clone)]
pub struct ApiLauncher {
    docker: Docker,
}

impl ApiLauncher {
    /// Build a daemon client from the configured socket.
    ///
    /// No I/O happens here; the daemon is first contacted in `launch`.
    pub fn connect(settings: &DockerSettings) -> Result<Self, LaunchError> {
        let docker = if settings.socket_path.starts_with("unix://") {
            Docker::connect_with_unix(&settings.socket_path, 120, bollard::API_DEFAULT_VERSION)?
        } else {
            Docker::connect_with_socket_defaults()?
        };

        Ok(Self { docker })
    }

    /// Container config sent with the create call
    pub fn build_create_config(plan: &LaunchPlan) -> Config<String> {
        Config {
            image: Some(plan.image.clone()),
            env: Some(plan.env.clone()),
            host_config: Some(Self::build_host_config(plan)),
            networking_config: Self::build_networking_config(plan),
            ..Default::default()
        }
    }

    fn build_host_config(plan: &LaunchPlan) -> HostConfig {
        let mounts = plan
            .mounts
            .iter()
            .map(|mount| Mount {
                source: Some(mount.source.clone()),
                target: Some(mount.target.clone()),
                typ: Some(MountTypeEnum::BIND),
                ..Default::default()
            })
            .collect();

        HostConfig {
            auto_remove: Some(plan.auto_remove),
            mounts: Some(mounts),
            network_mode: plan.network.clone(),
            ..Default::default()
        }
    }

    fn build_networking_config(plan: &LaunchPlan) -> Option<NetworkingConfig<String>> {
        let network = plan.network.as_ref()?;

        let ipam_config = plan.ip.as_ref().map(|ip| EndpointIpamConfig {
            ipv4_address: Some(ip.clone()),
            ..Default::default()
        });

        let endpoint = EndpointSettings {
            ipam_config,
            ..Default::default()
        };

        Some(NetworkingConfig {
            endpoints_config: HashMap::from([(network.clone(), endpoint)]),
        })
    }
}

#[async_trait]
impl Launcher for ApiLauncher {
    async fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let version = self.docker.version().await?;
        debug!(
            "connected to docker daemon version {}",
            version.version.unwrap_or_default()
        );

        let options = CreateContainerOptions {
            name: plan.container_name.clone(),
            platform: None,
        };

        let created = self
            .docker
            .create_container(Some(options), Self::build_create_config(plan))
            .await?;

        self.docker
            .start_container(&created.id, None::<StartContainerOptions<String>>)
            .await?;

        info!(
            container = %plan.container_name,
            id = %created.id,
            "container started via daemon API"
        );
        Ok(())
    }
}
