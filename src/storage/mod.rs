//! Persisted key-value storage capability.
//!
//! Connection state that must survive a page reload — the last connected
//! wallet address and the shim-disconnect flag — lives behind the [`Storage`]
//! trait instead of ambient global state. Hosts plug in browser-backed
//! storage; tests substitute [`MemoryStorage`] and assert the exact key and
//! value operations.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key holding the last connected wallet address.
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

/// Storage key holding the shim-disconnect flag of the connector with the
/// given id.
#[must_use]
pub fn shim_disconnect_key(connector_id: &str) -> String {
    format!("{connector_id}.shimDisconnect")
}

/// Browser-style persisted key-value storage.
///
/// Mirrors the `localStorage` contract: string keys, string values, absent
/// keys read as `None`. Writes are last-write-wins; the hosting framework is
/// expected to be single-instance per context, so no locking is required
/// beyond interior mutability.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if present.
    fn remove_item(&self, key: &str);
}

/// In-memory [`Storage`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().expect("storage mutex poisoned").len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .expect("storage mutex poisoned")
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("missing"), None);

        storage.set_item("key", "value");
        assert_eq!(storage.get_item("key").as_deref(), Some("value"));

        storage.set_item("key", "replaced");
        assert_eq!(storage.get_item("key").as_deref(), Some("replaced"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("key");
        assert_eq!(storage.get_item("key"), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_shim_disconnect_key_is_namespaced() {
        assert_eq!(
            shim_disconnect_key("smart-connect"),
            "smart-connect.shimDisconnect"
        );
    }
}
