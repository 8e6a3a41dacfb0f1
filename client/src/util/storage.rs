//! Key-value persistence capability for the saved user location.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal never touches `localStorage` directly. It receives a
//! `KeyValueStore` so tests (and SSR) can run against `MemoryStorage` while
//! the hydrated browser build uses `BrowserStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::net::types::LocationData;

/// Key under which the confirmed location is stored.
pub const LOCATION_STORAGE_KEY: &str = "userLocation";

/// Synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are swallowed.
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`, resolved on every call.
///
/// Outside the hydrated browser build every read misses and every write is
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key` with `value`.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// True when any non-empty value is stored under the location key.
pub fn has_saved_location(store: &dyn KeyValueStore) -> bool {
    store
        .get(LOCATION_STORAGE_KEY)
        .is_some_and(|raw| !raw.is_empty())
}

/// Decode the saved location, if one is present and parses.
pub fn load_location(store: &dyn KeyValueStore) -> Option<LocationData> {
    let raw = store.get(LOCATION_STORAGE_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize `location` as JSON under the location key.
pub fn save_location(store: &dyn KeyValueStore, location: &LocationData) {
    let Ok(raw) = serde_json::to_string(location) else {
        return;
    };
    store.set(LOCATION_STORAGE_KEY, &raw);
}
