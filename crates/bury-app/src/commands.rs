//! Subcommand handlers.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use bury_common::{Action, BuryError};
use bury_config::{toml_loader, BuryConfig, ReloadManager};
use tracing::{info, warn};

use crate::cli::ConfigAction;
use crate::session::{describe_event, Flow, Session};

/// Resolve `--config` or fall back to the platform default path.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, BuryError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(toml_loader::default_config_path()?),
    }
}

/// Parse every step up front so a typo fails before anything runs.
pub fn parse_steps<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Action>, BuryError> {
    steps
        .iter()
        .map(|step| {
            step.as_ref().parse::<Action>().map_err(|_| {
                BuryError::Command(format!(
                    "unknown step '{}' (expected one of: {})",
                    step.as_ref(),
                    Action::step_names().join(", ")
                ))
            })
        })
        .collect()
}

pub fn simulate(
    config: BuryConfig,
    path: Option<PathBuf>,
    steps: &[String],
    out: &mut impl Write,
) -> Result<(), BuryError> {
    let actions = parse_steps(steps)?;
    let mut session = Session::new(config, path);
    print_step(&mut session, None, out)?;

    for action in actions {
        let flow = session.step(action)?;
        print_step(&mut session, Some(action), out)?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Interactive loop over stdin with live config reload.
pub fn session(path: PathBuf) -> Result<(), BuryError> {
    if !path.exists() {
        toml_loader::create_default_config(&path)?;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let (config, mut updates) = runtime.block_on(ReloadManager::start(path.clone()));
    let mut session = Session::new(config, Some(path));

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = std::io::stdout().lock();
    print_step(&mut session, None, &mut out)?;

    loop {
        if interactive {
            write!(out, "bury> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if updates.has_changed().unwrap_or(false) {
            let config = updates.borrow_and_update().clone();
            session.apply_config(config);
            writeln!(out, "config reloaded")?;
        }

        let line = line.split('#').next().unwrap_or_default();
        let mut quit = false;
        for word in line.split_whitespace() {
            let action = match word.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };
            match session.step(action) {
                Ok(Flow::Quit) => {
                    quit = true;
                    break;
                }
                Ok(Flow::Continue) => print_step(&mut session, Some(action), &mut out)?,
                Err(e) => {
                    warn!("step '{word}' failed: {e}");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        if quit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}

pub fn config(action: ConfigAction, path: PathBuf, out: &mut impl Write) -> Result<(), BuryError> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                writeln!(out, "config already exists at {}", path.display())?;
            } else {
                toml_loader::create_default_config(&path)?;
                writeln!(out, "wrote {}", path.display())?;
            }
        }
        ConfigAction::Show => {
            let config = bury_config::load_config_from(Some(&path))?;
            writeln!(out, "{}", bury_config::config_to_json(&config))?;
        }
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Set { key, value } => {
            let current = if path.exists() {
                bury_config::load_config_from(Some(&path))?
            } else {
                BuryConfig::default()
            };
            let updated = bury_config::set_key(&current, &key, &value)?;
            bury_config::save_config_to_path(&updated, &path)?;
            writeln!(out, "{key} = {value}")?;
        }
    }
    Ok(())
}

fn print_step(
    session: &mut Session,
    action: Option<Action>,
    out: &mut impl Write,
) -> Result<(), BuryError> {
    match action {
        Some(action) => writeln!(out, "> {}", action.label())?,
        None => writeln!(out, "> initial layout")?,
    }
    for event in session.drain_events() {
        writeln!(out, "  [{}]", describe_event(&event))?;
    }
    for message in session.new_messages() {
        writeln!(out, "  \"{message}\"")?;
    }
    write!(out, "{}", session.frame().render())?;
    Ok(())
}
