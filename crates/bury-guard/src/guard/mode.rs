//! Mode lifecycle: attaching the guard to a host's compilation hooks.

use std::cell::RefCell;
use std::rc::Rc;

use bury_common::{EventBus, GuardEvent};
use tracing::info;
use uuid::Uuid;

use crate::classify::FinishedCompilation;
use crate::hooks::{FinishHook, HookId, HookRegistry, StartHook};
use crate::host::EditorHost;
use crate::settings::GuardSettings;

use super::state::{GuardState, Transition};

const CAPTURE_HOOK: &str = "bury/capture-layout";
const RESTORE_HOOK: &str = "bury/restore-layout";

/// A [`GuardState`] plus the mode switch that wires it into a
/// [`HookRegistry`].
///
/// State and settings are shared with the registered hooks, so settings
/// changes take effect on the next hook call. Hooks are registered under ids
/// owned by this guard; other guards on the same registry are unaffected.
///
/// Hooks hold no borrow of the state or settings while calling into the
/// host, so a host may read [`LayoutGuard::state`] or call
/// [`LayoutGuard::update_settings`] from inside a callback. State changes
/// made during a callback are replaced by the hook's own result.
pub struct LayoutGuard {
    id: Uuid,
    state: Rc<RefCell<GuardState>>,
    settings: Rc<RefCell<GuardSettings>>,
    events: Option<EventBus>,
    enabled: bool,
}

impl LayoutGuard {
    pub fn new(settings: GuardSettings) -> Self {
        let state = GuardState::new(settings.save_windows_on_next_start);
        Self {
            id: Uuid::new_v4(),
            state: Rc::new(RefCell::new(state)),
            settings: Rc::new(RefCell::new(settings)),
            events: None,
            enabled: false,
        }
    }

    /// Publish a [`GuardEvent`] for every transition.
    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A copy of the current state.
    pub fn state(&self) -> GuardState {
        self.state.borrow().clone()
    }

    pub fn settings(&self) -> GuardSettings {
        self.settings.borrow().clone()
    }

    /// Replace the settings. A changed `save_windows_on_next_start` is
    /// written through to the capture flag.
    pub fn update_settings(&self, settings: GuardSettings) {
        let mut current = self.settings.borrow_mut();
        if current.save_windows_on_next_start != settings.save_windows_on_next_start {
            self.state
                .borrow_mut()
                .set_armed(settings.save_windows_on_next_start);
        }
        *current = settings;
    }

    pub fn capture_hook_id(&self) -> HookId {
        HookId::owned_by(CAPTURE_HOOK, self.id)
    }

    pub fn restore_hook_id(&self) -> HookId {
        HookId::owned_by(RESTORE_HOOK, self.id)
    }

    /// Attach both hooks. Calling this again does not register them twice.
    pub fn enable(&mut self, hooks: &mut HookRegistry) {
        let added_start = hooks.add_before_compile(self.capture_hook_id(), self.start_hook());
        let added_finish = hooks.add_on_finish(self.restore_hook_id(), self.finish_hook());

        if !self.enabled || added_start || added_finish {
            info!("bury mode enabled");
            publish(&self.events, GuardEvent::ModeEnabled);
        }
        self.enabled = true;
    }

    /// Detach both hooks and drop the saved layout. The capture flag keeps
    /// its value, so re-enabling resumes where it left off.
    pub fn disable(&mut self, hooks: &mut HookRegistry) {
        hooks.remove_before_compile(self.capture_hook_id());
        hooks.remove_on_finish(self.restore_hook_id());
        self.state.borrow_mut().clear_saved_layout();

        if self.enabled {
            info!("bury mode disabled");
            publish(&self.events, GuardEvent::ModeDisabled);
        }
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool, hooks: &mut HookRegistry) {
        if enabled {
            self.enable(hooks);
        } else {
            self.disable(hooks);
        }
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&mut self, hooks: &mut HookRegistry) -> bool {
        let enabled = !self.enabled;
        self.set_enabled(enabled, hooks);
        enabled
    }

    fn start_hook(&self) -> StartHook {
        let state = self.state.clone();
        let events = self.events.clone();
        Rc::new(move |host: &mut dyn EditorHost| {
            let mut current = state.borrow().clone();
            let transition = current.on_compilation_start(host);
            *state.borrow_mut() = current;
            report(&events, transition);
        })
    }

    fn finish_hook(&self) -> FinishHook {
        let state = self.state.clone();
        let settings = self.settings.clone();
        let events = self.events.clone();
        Rc::new(move |host: &mut dyn EditorHost, finished: &FinishedCompilation| {
            let settings = settings.borrow().clone();
            let mut current = state.borrow().clone();
            let transition = current.on_compilation_finish(host, finished, &settings);
            *state.borrow_mut() = current;
            report(&events, transition);
        })
    }
}

impl Default for LayoutGuard {
    fn default() -> Self {
        Self::new(GuardSettings::default())
    }
}

fn report(events: &Option<EventBus>, transition: Transition) {
    let event = match transition {
        Transition::Captured(snapshot) => GuardEvent::LayoutCaptured(snapshot),
        Transition::CaptureSkipped => GuardEvent::CaptureSkipped,
        Transition::CaptureFailed => return,
        Transition::Restored { snapshot, applied } => {
            info!(applied, "compilation clean, restored window layout");
            GuardEvent::LayoutRestored(snapshot)
        }
        Transition::Kept(outcome) => {
            info!(%outcome, "compilation not clean, leaving output visible");
            GuardEvent::RestoreKept {
                outcome: outcome.to_string(),
            }
        }
        Transition::Discarded => GuardEvent::LayoutDiscarded,
    };
    publish(events, event);
}

fn publish(events: &Option<EventBus>, event: GuardEvent) {
    if let Some(bus) = events {
        bus.publish(event);
    }
}
