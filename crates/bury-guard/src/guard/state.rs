//! The capture/restore state machine, independent of hook wiring.

use bury_common::SnapshotId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{BuildOutcome, FinishedCompilation};
use crate::host::EditorHost;
use crate::settings::GuardSettings;

/// What a single hook call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Layout recorded at compilation start.
    Captured(SnapshotId),
    /// A snapshot is pending; the start hook left it alone.
    CaptureSkipped,
    /// The host could not record the layout.
    CaptureFailed,
    /// Clean finish. `snapshot` is the layout that was consumed, if any;
    /// `applied` is false when there was none or the host rejected it.
    Restored {
        snapshot: Option<SnapshotId>,
        applied: bool,
    },
    /// Unclean finish; output stays on screen.
    Kept(BuildOutcome),
    /// Output was not visible at finish; the pending snapshot was dropped.
    Discarded,
}

/// State of one guard.
///
/// *Armed* (`armed_for_capture`) means the next compilation start records
/// the layout. *Pending* means a snapshot is waiting for a clean finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardState {
    armed_for_capture: bool,
    saved_layout: Option<SnapshotId>,
    last_outcome: Option<BuildOutcome>,
}

impl GuardState {
    pub fn new(armed_for_capture: bool) -> Self {
        Self {
            armed_for_capture,
            saved_layout: None,
            last_outcome: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_for_capture
    }

    pub fn is_pending(&self) -> bool {
        !self.armed_for_capture
    }

    pub fn saved_layout(&self) -> Option<&SnapshotId> {
        self.saved_layout.as_ref()
    }

    pub fn last_outcome(&self) -> Option<BuildOutcome> {
        self.last_outcome
    }

    pub fn set_armed(&mut self, armed: bool) {
        self.armed_for_capture = armed;
    }

    /// Drop the saved layout without touching the capture flag.
    pub fn clear_saved_layout(&mut self) {
        self.saved_layout = None;
    }

    /// Called before a build starts.
    pub fn on_compilation_start(&mut self, host: &mut dyn EditorHost) -> Transition {
        if !self.armed_for_capture {
            debug!("snapshot pending, not capturing layout");
            return Transition::CaptureSkipped;
        }

        match host.capture_layout() {
            Ok(snapshot) => {
                debug!(%snapshot, "captured window layout");
                self.saved_layout = Some(snapshot.clone());
                Transition::Captured(snapshot)
            }
            Err(e) => {
                debug!("layout capture failed: {e}");
                self.saved_layout = None;
                Transition::CaptureFailed
            }
        }
    }

    /// Called once a build has exited.
    pub fn on_compilation_finish(
        &mut self,
        host: &mut dyn EditorHost,
        finished: &FinishedCompilation,
        settings: &GuardSettings,
    ) -> Transition {
        if !host.is_output_visible() {
            // Output already dismissed; drop the snapshot and re-arm.
            debug!("compilation output not visible, discarding saved layout");
            self.saved_layout = None;
            self.armed_for_capture = true;
            self.last_outcome = Some(BuildOutcome::Discarded);
            return Transition::Discarded;
        }

        let outcome = settings.classify(finished);
        self.last_outcome = Some(outcome);
        self.armed_for_capture = outcome.is_clean();

        if !outcome.is_clean() {
            debug!(%outcome, "keeping compilation output visible");
            return Transition::Kept(outcome);
        }

        let snapshot = self.saved_layout.take();
        let applied = match &snapshot {
            Some(id) => match host.restore_layout(id) {
                Ok(()) => true,
                Err(e) => {
                    debug!("ignoring failed layout restore: {e}");
                    false
                }
            },
            None => {
                debug!("no saved layout to restore");
                false
            }
        };
        host.notify_user(&settings.notify_message);

        Transition::Restored { snapshot, applied }
    }
}

impl Default for GuardState {
    fn default() -> Self {
        Self::new(true)
    }
}
