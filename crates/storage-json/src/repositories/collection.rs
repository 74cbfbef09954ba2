//! Whole-collection read-modify-write helper shared by the repositories.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::KeyValueStore;
use propfolio_core::errors::StorageError;
use propfolio_core::Result;

/// One logical collection persisted as a JSON array under a fixed key.
pub(crate) struct Collection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    /// Reads the full collection; an absent document is an empty collection.
    pub fn load(&self) -> Result<Vec<T>> {
        match self.store.load(self.key)? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| StorageError::Corrupt(format!("{}: {}", self.key, e)).into()),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the full collection back.
    pub fn save(&self, items: &[T]) -> Result<()> {
        let value = serde_json::to_value(items)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.key, e)))?;
        self.store.save(self.key, &value)
    }

    /// Reads, applies the mutation, writes back, and returns its result.
    pub fn mutate<R>(&self, mutation: impl FnOnce(&mut Vec<T>) -> R) -> Result<R> {
        let mut items = self.load()?;
        let result = mutation(&mut items);
        self.save(&items)?;
        Ok(result)
    }
}
