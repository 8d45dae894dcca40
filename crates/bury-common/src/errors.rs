use std::path::PathBuf;

use crate::id::SnapshotId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures reported by the editor host's window system.
///
/// The layout guard never lets these escape a hook; they exist so hosts
/// can say *why* a capture or restore did nothing.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid layout snapshot: {0}")]
    InvalidSnapshot(SnapshotId),

    #[error("buffer not found: {0}")]
    BufferMissing(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BuryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid command: {0}")]
    Command(String),

    #[error("{0}")]
    Other(String),
}
