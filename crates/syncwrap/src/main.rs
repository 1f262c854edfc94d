//! # syncwrap
//!
//! Single-shot launcher for the sync container: parse one JSON document,
//! validate it, then create and start the container.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::config::{load_settings, ConfigValidation};
use syncwrap::cli::SyncwrapArgs;
use syncwrap::config::{load_sync_config, LaunchStrategy, LauncherSettings};
use syncwrap::launcher::{ApiLauncher, CommandLauncher, Launcher};

#[tokio::main]
async fn main() -> Result<()> {
    let args = SyncwrapArgs::parse_args();

    init_logging(&args.log_level)?;

    let settings: LauncherSettings = load_settings(args.settings.as_deref())?;
    settings.validate()?;
    for warning in settings.warnings() {
        warn!("{warning}");
    }

    let config = load_sync_config(&args.config)?;
    info!("loaded sync configuration from {}", args.config.display());

    let strategy = args.strategy.unwrap_or(settings.strategy);
    let launcher: Box<dyn Launcher> = match strategy {
        LaunchStrategy::Command => Box::new(CommandLauncher::new(settings.docker.clone())),
        LaunchStrategy::Api => Box::new(ApiLauncher::connect(&settings.docker)?),
    };

    syncwrap::run(&config, &settings, launcher.as_ref()).await?;

    println!("Started the sync container \"{}\"", settings.container_name);
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    Ok(())
}
