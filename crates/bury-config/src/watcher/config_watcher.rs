//! Watches the config file with `notify` and emits debounced change signals.

use bury_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period after the last file event before a reload is signalled.
///
/// Editors that save via write-then-rename produce several events per save.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a watcher for `path`. The file does not need to exist yet.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the notify channel closes, sending `()` on `tx` once per
    /// burst of changes to the config file.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self.path.file_name().map(OsString::from).unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);

        // Held for the lifetime of the loop; dropping it stops the OS watch.
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if is_config_change(&event, &file_name) => {
                    debug!("config file change detected");
                    let _ = raw_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

        while raw_rx.recv().await.is_some() {
            let quiet = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(quiet);

            loop {
                tokio::select! {
                    _ = &mut quiet => break,
                    msg = raw_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                        quiet.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        Ok(())
    }
}

/// True for create/modify events that touch a file named `file_name`.
pub(crate) fn is_config_change(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}
