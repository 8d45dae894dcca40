pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::Action;
pub use errors::{BuryError, ConfigError, HostError};
pub use events::{EventBus, GuardEvent};
pub use id::{new_id, SnapshotId};
pub use notifications::NotificationQueue;
pub use types::{BufferKind, BuildKind, PaneId, Rect, WarningScan};

pub type Result<T> = std::result::Result<T, BuryError>;
