/// Key/value persistence over browser localStorage

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key/value store. Reads and writes never fail loudly.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage`, or nothing when the browser denies access
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, preferences and history will not persist");
        }
        BrowserStore { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to write {}: {:?}", key, e);
            }
        }
    }
}

/// Load a JSON value, falling back to the default when absent or malformed
pub fn load_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.read(key) {
        None => T::default(),
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed {}: {}", key, e);
            T::default()
        }),
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.write(key, &json),
        Err(e) => log::warn!("Failed to serialize {}: {}", key, e),
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-process store for unit tests
    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_load_missing_key_gives_default() {
        let store = MemoryStore::default();
        let values: Vec<String> = load_json(&store, "missing");
        assert!(values.is_empty());
    }

    #[test]
    fn test_load_malformed_json_gives_default() {
        let store = MemoryStore::default();
        store.write("list", "[not json");
        let values: Vec<String> = load_json(&store, "list");
        assert!(values.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_gives_default() {
        let store = MemoryStore::default();
        store.write("list", "{\"a\": 1}");
        let values: Vec<String> = load_json(&store, "list");
        assert!(values.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        save_json(&store, "list", &vec!["a".to_string(), "b".to_string()]);

        assert_eq!(store.read("list").as_deref(), Some("[\"a\",\"b\"]"));
        let values: Vec<String> = load_json(&store, "list");
        assert_eq!(values, vec!["a", "b"]);
    }
}
