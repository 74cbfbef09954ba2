//! File-backed key-value store, one JSON document per key.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use log::debug;
use serde_json::Value;

use crate::store::KeyValueStore;
use propfolio_core::errors::StorageError;
use propfolio_core::Result;

/// Durable store writing each key to `<root>/<key>.json`.
///
/// Writes go through a temp file and rename so a crash never leaves a
/// half-written document. The interior lock only serializes access within
/// this process; a second process writing the same directory is
/// last-writer-wins, per the persistence model.
pub struct JsonFileStore {
    root: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    /// Opens (creating if needed) a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::OpenFailed(format!("Cannot create store directory: {}", e))
        })?;
        debug!("Opened JSON file store at {}", root.display());
        Ok(Self {
            root,
            lock: RwLock::new(()),
        })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are fixed collection constants; anything path-like is a bug.
        if key.is_empty() || key.contains(|c| c == '/' || c == '\\' || c == '.') {
            return Err(StorageError::Internal(format!("Invalid store key '{}'", key)).into());
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        let _guard = self
            .lock
            .read()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string()).into()),
        };
        let value = serde_json::from_str(&content)
            .map_err(|e| StorageError::Corrupt(format!("{}: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key)?;
        let _guard = self
            .lock
            .write()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _guard = self
            .lock
            .write()
            .map_err(|e| StorageError::Internal(format!("Store lock poisoned: {}", e)))?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(e.to_string()).into()),
        }
    }
}
