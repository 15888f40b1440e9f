//! String-keyed persistence: backends and the JSON helper on top of them
//!
//! Backends store plain strings under string keys, the way browser local
//! storage does. [`Storage`] layers JSON (de)serialization over a backend and
//! never hands errors back to its callers: reads fall back to the supplied
//! default and writes report a success flag, with the cause logged.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::Result;

/// Key holding the serialized [`crate::Content`]
pub const SITE_CONTENT_KEY: &str = "siteContent";
/// Key holding the serialized [`crate::TrackingSettings`]
pub const TRACKING_SETTINGS_KEY: &str = "trackingSettings";
/// Key set to `"true"` while the dashboard is unlocked
pub const DASHBOARD_AUTH_KEY: &str = "dashboardAuth";
/// Key holding the dashboard password
pub const DASHBOARD_PASSWORD_KEY: &str = "dashboardPassword";

/// A raw string key-value store.
pub trait Backend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

/// JSON persistence helper shared by every store in the crate.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn Backend>,
}

impl Storage {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_arc(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Storage over a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read and deserialize `key`.
    ///
    /// Returns `default` when the key is missing or empty, or when the backend
    /// or the deserializer fails. Failures are logged, never returned.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                log::debug!("storage: {} not set, using default", key);
                return default;
            }
            Err(e) => {
                log::error!("storage: error reading {}: {}", key, e);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::error!("storage: error parsing {}: {}", key, e);
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`. Returns `false` on failure.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("storage: error serializing {}: {}", key, e);
                return false;
            }
        };
        self.set_raw(key, &raw)
    }

    /// Plain string read, for keys that are not JSON encoded.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("storage: error reading {}: {}", key, e);
                None
            }
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) -> bool {
        match self.backend.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::error!("storage: error saving {}: {}", key, e);
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                log::error!("storage: error removing {}: {}", key, e);
                false
            }
        }
    }

    /// Drop every key in the store.
    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                log::error!("storage: error clearing store: {}", e);
                false
            }
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.backend.keys().unwrap_or_else(|e| {
            log::error!("storage: error listing keys: {}", e);
            Vec::new()
        })
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
