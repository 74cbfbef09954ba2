//! Key-value store abstraction and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use propfolio_core::errors::StorageError;
use propfolio_core::Result;

/// A keyed JSON document store.
///
/// Every collection is persisted as one document under a fixed key;
/// mutations are whole-document read-modify-write. Implementations only
/// guarantee in-process exclusivity; concurrent writers in other processes
/// are last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&self, key: &str, value: &Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Volatile store backed by a map. The default for tests.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        documents.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        documents.remove(key);
        Ok(())
    }
}

/// Decorator namespacing every key with a tenant identifier.
pub struct ScopedStore {
    inner: Arc<dyn KeyValueStore>,
    scope: String,
}

impl ScopedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>, scope: impl Into<String>) -> Self {
        Self {
            inner,
            scope: scope.into(),
        }
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("{}:{}", self.scope, key)
    }
}

impl KeyValueStore for ScopedStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        self.inner.load(&self.scoped_key(key))
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        self.inner.save(&self.scoped_key(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(&self.scoped_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("missing").unwrap().is_none());

        store.save("key", &json!([1, 2, 3])).unwrap();
        assert_eq!(store.load("key").unwrap(), Some(json!([1, 2, 3])));

        store.remove("key").unwrap();
        assert!(store.load("key").unwrap().is_none());
    }

    #[test]
    fn test_scoped_store_isolates_tenants() {
        let inner = Arc::new(MemoryStore::new());
        let tenant_a = ScopedStore::new(inner.clone(), "tenant-a");
        let tenant_b = ScopedStore::new(inner.clone(), "tenant-b");

        tenant_a.save("k", &json!("a")).unwrap();
        tenant_b.save("k", &json!("b")).unwrap();

        assert_eq!(tenant_a.load("k").unwrap(), Some(json!("a")));
        assert_eq!(tenant_b.load("k").unwrap(), Some(json!("b")));
        assert_eq!(inner.load("tenant-a:k").unwrap(), Some(json!("a")));
    }
}
