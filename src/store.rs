//! Token store with persistence and change notification
//!
//! Owns the active token configuration. Mutations go through the
//! path-addressed protocol, are persisted to disk, and fan out to
//! subscribers so embedding layers can reapply derived state (for
//! example the live CSS variables from [`crate::view::root_variables`]).

use crate::config::{self, TokenConfig, TokenLoader};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

type Subscriber = Arc<dyn Fn(&TokenConfig) + Send + Sync>;

/// Shared handle to the active token configuration
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<RwLock<TokenConfig>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    file_path: PathBuf,
}

impl TokenStore {
    /// Open the store against the default token file
    pub fn load() -> Self {
        Self::with_file(config::paths::tokens_file_path())
    }

    /// Open the store against an explicit token file
    ///
    /// The file is loaded leniently: missing or corrupt contents yield the
    /// default configuration.
    pub fn with_file(path: PathBuf) -> Self {
        let config = TokenLoader::load_from(&path);
        Self {
            inner: Arc::new(RwLock::new(config)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            file_path: path,
        }
    }

    /// Get a snapshot of the current configuration
    pub fn current(&self) -> TokenConfig {
        self.inner.read().unwrap().clone()
    }

    /// The file this store persists to
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Set a token value by path, persist, and notify subscribers
    ///
    /// Returns the new snapshot. Fails only on an unknown path or an
    /// unparseable value, in which case nothing changes; a persistence
    /// failure is logged and does not undo the mutation.
    pub fn set(&self, path: &str, value: &str) -> Result<TokenConfig> {
        let updated = {
            let mut state = self.inner.write().unwrap();
            let mut next = state.clone();
            config::set_token_value(&mut next, path, value)?;
            *state = next.clone();
            next
        };

        self.persist(&updated);
        self.notify(&updated);
        Ok(updated)
    }

    /// Restore the default configuration, persist, and notify subscribers
    pub fn reset(&self) -> TokenConfig {
        let updated = {
            let mut state = self.inner.write().unwrap();
            *state = TokenConfig::default();
            state.clone()
        };

        self.persist(&updated);
        self.notify(&updated);
        updated
    }

    /// Register a callback invoked with each new snapshot after a mutation
    ///
    /// Callbacks run in registration order and live for the life of the
    /// store. A callback may itself register new subscribers; those see
    /// only later mutations.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&TokenConfig) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Arc::new(callback));
    }

    fn persist(&self, config: &TokenConfig) {
        if let Err(e) = TokenLoader::save(config, &self.file_path) {
            tracing::warn!(
                "Failed to persist tokens to {}: {:#}",
                self.file_path.display(),
                e
            );
        }
    }

    fn notify(&self, config: &TokenConfig) {
        // Clone the list out of the lock so a callback can register new
        // subscribers without deadlocking.
        let subscribers: Vec<Subscriber> = self.subscribers.read().unwrap().clone();
        for callback in &subscribers {
            callback(config);
        }
    }
}
