//! Persistence bridge for preference values
//!
//! The bridge is the storage seam for the stores: a string-per-key load/save
//! pair plus a single "storage changed" signal that every running instance
//! sharing the store observes. Production code uses [`KvBridge`] over the
//! sled store; anything implementing [`PreferenceBridge`] can stand in for
//! it.

use std::sync::Arc;

use storage::{sled, KvStore};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Capacity of the change broadcast channel
///
/// Preference writes are user-driven and rare; a small buffer only has to
/// absorb bursts while a listener is between polls.
const CHANGE_BUFFER: usize = 64;

/// Errors surfaced by the persistence bridge
///
/// Stores treat every variant as non-fatal: the in-memory and surface updates
/// have already happened by the time persistence runs.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The backend rejected or failed the write
    #[error("Failed to persist preference: {0}")]
    WriteFailed(String),

    /// No storage backend is available in this environment
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// A single external storage change, filtered by consumers by exact key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    /// The storage key that changed
    pub key: String,
    /// The new raw string value
    pub new_value: String,
}

/// Storage access used by the preference stores
///
/// `load` failures collapse to `None`; `save` failures are reported but the
/// caller is expected to swallow them. `changes` hands out an independent
/// receiver for the bridge-wide change signal.
pub trait PreferenceBridge: Send + Sync {
    /// Read the raw value for a key; any failure yields `None`
    fn load(&self, key: &str) -> Option<String>;

    /// Best-effort write of the raw value for a key
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Subscribe to storage changes observed by this bridge
    fn changes(&self) -> broadcast::Receiver<StorageChange>;
}

/// Production bridge over the sled-backed [`KvStore`]
///
/// A watcher task forwards sled subscription events into the broadcast
/// channel, so every running engine sharing the store observes every write,
/// including its own (stores de-duplicate the echo).
///
/// Must be constructed inside a Tokio runtime.
pub struct KvBridge {
    kv: KvStore,
    changes_tx: broadcast::Sender<StorageChange>,
    watcher: JoinHandle<()>,
}

impl KvBridge {
    /// Create a bridge over `kv` and start watching for changes
    pub fn new(kv: KvStore) -> Arc<Self> {
        let (changes_tx, _) = broadcast::channel(CHANGE_BUFFER);
        let mut subscriber = kv.watch("");
        let tx = changes_tx.clone();

        let watcher = tokio::spawn(async move {
            while let Some(event) = (&mut subscriber).await {
                if let sled::Event::Insert { key, value } = event {
                    let Ok(key) = String::from_utf8(key.to_vec()) else {
                        continue;
                    };
                    // Values are stored JSON-encoded; fall back to the raw
                    // bytes for foreign writers so consumers still converge.
                    let new_value = serde_json::from_slice::<String>(&value)
                        .unwrap_or_else(|_| String::from_utf8_lossy(&value).into_owned());
                    let _ = tx.send(StorageChange { key, new_value });
                }
            }
        });

        Arc::new(Self { kv, changes_tx, watcher })
    }
}

impl PreferenceBridge for KvBridge {
    fn load(&self, key: &str) -> Option<String> {
        match self.kv.get::<String>(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key, %err, "Failed to load preference");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.kv
            .set(key, &value.to_string())
            .map_err(|err| PersistenceError::WriteFailed(err.to_string()))
    }

    fn changes(&self) -> broadcast::Receiver<StorageChange> {
        self.changes_tx.subscribe()
    }
}

impl Drop for KvBridge {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
