//! Unit tests for launch plan derivation and the launch strategies

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bollard::models::MountTypeEnum;
use syncwrap::config::{LauncherSettings, SyncConfig};
use syncwrap::launcher::{ApiLauncher, CommandLauncher, LaunchError, LaunchPlan, Launcher};

fn network_config() -> SyncConfig {
    SyncConfig {
        folders: vec!["/data/a".to_string(), "/data/b".to_string()],
        storage: "/cfg".to_string(),
        ip: Some("172.18.0.10".to_string()),
        network: Some("syncnet".to_string()),
        uid: 1000,
        gid: 1000,
    }
}

fn plain_config() -> SyncConfig {
    SyncConfig {
        ip: None,
        network: None,
        ..network_config()
    }
}

#[test]
fn test_plan_derivation() {
    let plan = LaunchPlan::build(&LauncherSettings::default(), &network_config());

    assert_eq!(plan.container_name, "Sync");
    assert_eq!(plan.image, "sync:slim");
    assert_eq!(plan.network.as_deref(), Some("syncnet"));
    assert_eq!(plan.ip.as_deref(), Some("172.18.0.10"));
    assert_eq!(plan.env, vec!["USERID=1000", "GROUPID=1000"]);
    assert!(plan.auto_remove);

    // Storage mount is always last
    assert_eq!(plan.mounts.last().unwrap().target, "/mnt/config");
}

#[test]
fn test_plan_treats_empty_network_fields_as_unset() {
    let config = SyncConfig {
        ip: Some(String::new()),
        network: Some(String::new()),
        ..network_config()
    };

    let plan = LaunchPlan::build(&LauncherSettings::default(), &config);
    assert!(plan.network.is_none());
    assert!(plan.ip.is_none());
}

#[test]
fn test_command_args_with_network() {
    let plan = LaunchPlan::build(&LauncherSettings::default(), &network_config());
    let args = CommandLauncher::build_args(&plan);

    assert_eq!(args[..4], ["run", "--name", "Sync", "--rm"]);
    assert!(args.contains(&"--volume=/data/a:/mnt/folders/a".to_string()));
    assert!(args.contains(&"--volume=/data/b:/mnt/folders/b".to_string()));
    assert!(args.contains(&"--volume=/cfg:/mnt/config".to_string()));
    assert!(args.contains(&"--net=syncnet".to_string()));
    assert!(args.contains(&"--ip=172.18.0.10".to_string()));
    assert!(args.contains(&"--env=USERID=1000".to_string()));
    assert!(args.contains(&"--env=GROUPID=1000".to_string()));

    // Detach flag right before the image, image last
    assert_eq!(args[args.len() - 2], "-d");
    assert_eq!(args[args.len() - 1], "sync:slim");
}

#[test]
fn test_command_args_without_network() {
    let plan = LaunchPlan::build(&LauncherSettings::default(), &plain_config());
    let args = CommandLauncher::build_args(&plan);

    assert!(!args.iter().any(|a| a.starts_with("--net=")));
    assert!(!args.iter().any(|a| a.starts_with("--ip=")));
}

#[test]
fn test_command_args_without_auto_remove() {
    let settings = LauncherSettings {
        auto_remove: false,
        ..Default::default()
    };
    let plan = LaunchPlan::build(&settings, &plain_config());
    let args = CommandLauncher::build_args(&plan);

    assert!(!args.contains(&"--rm".to_string()));
}

#[test]
fn test_api_create_config_with_network() {
    let plan = LaunchPlan::build(&LauncherSettings::default(), &network_config());
    let config = ApiLauncher::build_create_config(&plan);

    assert_eq!(config.image.as_deref(), Some("sync:slim"));
    assert_eq!(
        config.env,
        Some(vec!["USERID=1000".to_string(), "GROUPID=1000".to_string()])
    );

    let host_config = config.host_config.unwrap();
    assert_eq!(host_config.auto_remove, Some(true));
    assert_eq!(host_config.network_mode.as_deref(), Some("syncnet"));

    let mounts = host_config.mounts.unwrap();
    assert_eq!(mounts.len(), 3);
    assert!(mounts.iter().all(|m| m.typ == Some(MountTypeEnum::BIND)));
    assert_eq!(mounts[2].source.as_deref(), Some("/cfg"));
    assert_eq!(mounts[2].target.as_deref(), Some("/mnt/config"));

    let networking = config.networking_config.unwrap();
    let endpoint = networking.endpoints_config.get("syncnet").unwrap();
    let ipam = endpoint.ipam_config.as_ref().unwrap();
    assert_eq!(ipam.ipv4_address.as_deref(), Some("172.18.0.10"));
}

#[test]
fn test_api_create_config_without_ip() {
    let config = SyncConfig {
        ip: None,
        ..network_config()
    };
    let plan = LaunchPlan::build(&LauncherSettings::default(), &config);
    let create = ApiLauncher::build_create_config(&plan);

    let networking = create.networking_config.unwrap();
    let endpoint = networking.endpoints_config.get("syncnet").unwrap();
    assert!(endpoint.ipam_config.is_none());
}

#[test]
fn test_api_create_config_without_network() {
    let plan = LaunchPlan::build(&LauncherSettings::default(), &plain_config());
    let create = ApiLauncher::build_create_config(&plan);

    assert!(create.networking_config.is_none());
    assert!(create.host_config.unwrap().network_mode.is_none());
}

/// Counts launch calls and remembers nothing else
struct CountingLauncher {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingLauncher {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }
}

#[async_trait]
impl Launcher for CountingLauncher {
    async fn launch(&self, _plan: &LaunchPlan) -> Result<(), LaunchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LaunchError::Spawn {
                binary: "docker".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_run_launches_valid_config_once() {
    let launcher = CountingLauncher::new(false);

    syncwrap::run(&network_config(), &LauncherSettings::default(), &launcher)
        .await
        .unwrap();

    assert_eq!(launcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_run_skips_launch_for_invalid_config() {
    let config = SyncConfig {
        uid: 0,
        ..network_config()
    };
    let launcher = CountingLauncher::new(false);

    let result = syncwrap::run(&config, &LauncherSettings::default(), &launcher).await;

    assert!(result.is_err());
    assert_eq!(launcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_run_surfaces_launch_failures() {
    let launcher = CountingLauncher::new(true);

    let result = syncwrap::run(&network_config(), &LauncherSettings::default(), &launcher).await;

    assert!(result.is_err());
    assert_eq!(launcher.calls.load(Ordering::SeqCst), 1);
}
