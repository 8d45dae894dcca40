//! Compilation layout guard.
//!
//! Records the window layout when a build starts and puts it back when the
//! build finishes cleanly, so successful compilation output gets out of the
//! way while failures stay on screen.

pub mod classify;
pub mod guard;
pub mod hooks;
pub mod host;
pub mod settings;

pub use classify::{BuildOutcome, FinishedCompilation, OutputView};
pub use guard::{GuardState, LayoutGuard, Transition};
pub use hooks::{FinishHook, HookId, HookRegistry, StartHook};
pub use host::{EditorHost, NoopHost, Result as HostResult};
pub use settings::GuardSettings;
