//! Configuration file watcher for live reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::HelperConfig;

/// Current configuration, swappable while readers hold snapshots.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<HelperConfig>>,
}

impl SharedConfig {
    pub fn new(config: HelperConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn load(&self) -> Arc<HelperConfig> {
        self.inner.load_full()
    }

    /// Replace the current configuration.
    pub fn store(&self, config: HelperConfig) {
        self.inner.store(Arc::new(config));
    }

    /// Apply every configuration received on `updates` until the sender is dropped.
    pub async fn follow(&self, mut updates: mpsc::UnboundedReceiver<HelperConfig>) {
        while let Some(config) = updates.recv().await {
            self.store(config);
            tracing::info!("Configuration reloaded");
        }
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(HelperConfig::default())
    }
}

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<HelperConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<HelperConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Reload the file and publish it. A broken file keeps the current config.
    fn reload(path: &Path, tx: &mpsc::UnboundedSender<HelperConfig>) {
        match load_config(path) {
            Ok(new_config) => {
                let _ = tx.send(new_config);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reload config, keeping current configuration");
            }
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading");
                        Self::reload(&path, &tx);
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default(),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}
