//! A guard attached to an in-memory frame, driven one step at a time.

mod report;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use bury_common::{Action, BuryError, EventBus, GuardEvent};
use bury_config::{BuryConfig, GuardConfig};
use bury_frame::{BuildJob, BuildRunner, Direction, Frame, LayoutEngine, SCRATCH_BUFFER};
use bury_guard::{GuardSettings, LayoutGuard};
use tokio::sync::broadcast;
use tracing::{debug, info};

pub use report::describe_event;

/// Whether the driver should keep reading steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    runner: BuildRunner,
    guard: LayoutGuard,
    events: broadcast::Receiver<GuardEvent>,
    config: BuryConfig,
    config_path: Option<PathBuf>,
    printed_messages: usize,
}

impl Session {
    /// Build a frame from `[frame]` and attach a guard configured from
    /// `[guard]`. `config_path` is where `reload` reads from.
    pub fn new(config: BuryConfig, config_path: Option<PathBuf>) -> Self {
        let frame = Frame::new()
            .with_max_registers(config.frame.max_registers as usize)
            .with_layout(LayoutEngine {
                gap: config.frame.gap,
            })
            .with_size(config.frame.columns, config.frame.lines);
        let mut runner = BuildRunner::new(frame);

        let bus = EventBus::new(64);
        let events = bus.subscribe();
        let mut guard = LayoutGuard::new(guard_settings(&config.guard)).with_events(bus);
        if config.guard.enabled {
            guard.enable(runner.hooks_mut());
        }

        Self {
            runner,
            guard,
            events,
            config,
            config_path,
            printed_messages: 0,
        }
    }

    pub fn guard(&self) -> &LayoutGuard {
        &self.guard
    }

    pub fn frame(&self) -> &Frame {
        self.runner.frame()
    }

    pub fn config(&self) -> &BuryConfig {
        &self.config
    }

    /// Apply a new config. Guard settings and the mode switch change
    /// immediately; frame settings apply to the next session.
    pub fn apply_config(&mut self, config: BuryConfig) {
        self.guard.update_settings(guard_settings(&config.guard));
        if config.guard.enabled != self.guard.is_enabled() {
            self.guard
                .set_enabled(config.guard.enabled, self.runner.hooks_mut());
        }
        if config.frame != self.config.frame {
            debug!("frame settings changed, effective on restart");
        }
        self.config = config;
    }

    /// Perform one action.
    pub fn step(&mut self, action: Action) -> Result<Flow, BuryError> {
        debug!(action = action.label(), "step");
        match action {
            Action::Compile(kind) => {
                self.runner.compile(&BuildJob::from_kind(kind));
            }
            Action::HideOutput => {
                let output = self.runner.frame().output_buffer().to_string();
                self.runner.frame_mut().bury_buffer(&output);
            }
            Action::SplitWindow => {
                self.runner
                    .frame_mut()
                    .split_window(Direction::Vertical, SCRATCH_BUFFER);
            }
            Action::EnableMode => self.guard.enable(self.runner.hooks_mut()),
            Action::DisableMode => self.guard.disable(self.runner.hooks_mut()),
            Action::ToggleMode => {
                self.guard.toggle(self.runner.hooks_mut());
            }
            Action::ShowLayout => {}
            Action::ReloadConfig => self.reload()?,
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Re-read the config file now.
    pub fn reload(&mut self) -> Result<(), BuryError> {
        let config = bury_config::load_config_from(self.config_path.as_deref())?;
        info!("config reloaded");
        self.apply_config(config);
        Ok(())
    }

    /// Guard events published since the last call.
    pub fn drain_events(&mut self) -> Vec<GuardEvent> {
        let mut drained = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => drained.push(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    debug!("missed {n} guard events");
                }
                Err(_) => break,
            }
        }
        drained
    }

    /// Messages shown to the user since the last call.
    pub fn new_messages(&mut self) -> Vec<String> {
        let frame = self.runner.frame();
        let fresh = frame.posted_messages() - self.printed_messages;
        self.printed_messages = frame.posted_messages();

        let kept: Vec<&str> = frame.messages().messages().collect();
        let skip = kept.len().saturating_sub(fresh);
        kept[skip..].iter().map(|m| m.to_string()).collect()
    }
}

/// Guard settings from the `[guard]` config section.
pub fn guard_settings(config: &GuardConfig) -> GuardSettings {
    GuardSettings {
        save_windows_on_next_start: config.save_windows_on_next_start,
        success_marker: config.success_marker.clone(),
        warning_marker: config.warning_marker.clone(),
        warning_scan: config.warning_scan,
        notify_message: config.notify_message.clone(),
    }
}
