use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bury: keep the compilation window out of the way of clean builds.
#[derive(Parser, Debug)]
#[command(name = "bury", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `bury=debug`). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scripted sequence of steps and print the frame after each.
    Simulate {
        /// Steps: ok, fail, warn, hide, split, enable, disable, toggle, show, reload.
        #[arg(required = true)]
        steps: Vec<String>,
    },
    /// Read steps from stdin, reloading the config file as it changes.
    Session,
    /// Inspect or edit the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the commented default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as JSON.
    Show,
    /// Print the config file path.
    Path,
    /// Set a single key, e.g. `guard.warning_scan whole_buffer`.
    Set { key: String, value: String },
}

pub fn parse() -> Args {
    Args::parse()
}
