//! Command line interface
//!
//! One positional argument: the sync JSON document. Everything else is
//! ambient (settings file, log level, strategy override). Argument errors
//! exit with status 1 instead of clap's default.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use crate::config::LaunchStrategy;

/// Launches the sync container from a JSON folder configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SyncwrapArgs {
    /// Path to the sync JSON configuration
    pub config: PathBuf,

    /// Launcher settings file (TOML)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Launch strategy override
    #[arg(long, value_enum)]
    pub strategy: Option<LaunchStrategy>,
}

impl SyncwrapArgs {
    /// Parse arguments, exiting with status 1 on usage errors
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => {
                // Help and version output still go through clap and exit 0
                let _ = err.print();
                let code = if err.use_stderr() { 1 } else { 0 };
                process::exit(code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_config_path() {
        let args = SyncwrapArgs::try_parse_from(["syncwrap", "/etc/sync.json"]).unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/sync.json"));
        assert_eq!(args.log_level, "info");
        assert!(args.strategy.is_none());
    }

    #[test]
    fn test_strategy_override() {
        let args =
            SyncwrapArgs::try_parse_from(["syncwrap", "sync.json", "--strategy", "api"]).unwrap();
        assert_eq!(args.strategy, Some(LaunchStrategy::Api));
    }

    #[test]
    fn test_missing_config_is_usage_error() {
        let result = SyncwrapArgs::try_parse_from(["syncwrap"]);
        assert!(result.is_err());
    }
}
