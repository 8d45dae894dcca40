use crate::schema::BuryConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file and publishes each valid, changed config on a
/// [`tokio::sync::watch`] channel. Invalid edits are logged and skipped, so
/// receivers always hold the last good config.
pub struct ReloadManager {
    pub(super) config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Must be called inside a tokio runtime; the watcher runs as a spawned
    /// task. A missing or unreadable file yields defaults.
    pub async fn start(config_path: PathBuf) -> (BuryConfig, watch::Receiver<BuryConfig>) {
        let manager = ReloadManager { config_path };

        let initial_config = match manager.reload_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                BuryConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<BuryConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) if config_tx.is_closed() => break,
                Ok(()) => self.publish_reload(&config_tx),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("skipped {n} config change notifications");
                    self.publish_reload(&config_tx);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        info!("config reload stopped");
    }

    /// Re-read the file and publish it if it parses, validates, and differs
    /// from the current config.
    pub(super) fn publish_reload(&self, config_tx: &watch::Sender<BuryConfig>) {
        match self.reload_config() {
            Ok(config) => {
                let changed = config_tx.send_if_modified(|current| {
                    if *current == config {
                        return false;
                    }
                    *current = config;
                    true
                });
                if changed {
                    info!("reloaded config from {}", self.config_path.display());
                }
            }
            Err(e) => warn!("ignoring config change: {e}"),
        }
    }

    fn reload_config(&self) -> Result<BuryConfig, bury_common::ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
