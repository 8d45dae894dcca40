mod cli;
mod commands;
mod session;

use std::process::ExitCode;

use bury_common::{BuryError, ConfigError};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn init_logging(explicit: Option<&str>, fallback: &str) {
    let filter = match explicit {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), BuryError> {
    let path = commands::config_path(args.config.as_deref())?;
    let loaded = bury_config::load_config_from(Some(&path));
    let fallback = loaded
        .as_ref()
        .map(|config| config.logging.level.directive())
        .unwrap_or("bury=info");
    init_logging(args.log_level.as_deref(), fallback);

    tracing::info!("bury v{} starting", env!("CARGO_PKG_VERSION"));
    let config = match loaded {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(path)) => {
            tracing::debug!("no config at {}, using defaults", path.display());
            bury_config::BuryConfig::default()
        }
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            bury_config::BuryConfig::default()
        }
    };

    let mut out = std::io::stdout().lock();
    match args.command.unwrap_or(Command::Session) {
        Command::Simulate { steps } => commands::simulate(config, Some(path), &steps, &mut out),
        Command::Session => {
            drop(out);
            commands::session(path)
        }
        Command::Config { action } => commands::config(action, path, &mut out),
    }
}

fn main() -> ExitCode {
    match run(cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bury: {e}");
            ExitCode::FAILURE
        }
    }
}
