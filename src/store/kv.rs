//! String-keyed durable key-value store backing the persistence adapter.
//! Shaped after the browser localStorage the tracked data originally lived
//! in: string keys, string values, synchronous writes.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &mut K {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// File-backed store: one JSON object per file, keys to string values.
/// Every write rewrites the whole file and completes before returning.
pub struct FileKv {
    path: PathBuf,
}

impl FileKv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::PersistenceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        // a damaged store file is treated as absent, per the recovery rules
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::PersistenceUnavailable(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| AppError::PersistenceUnavailable(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::PersistenceUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryKv {
    map: BTreeMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }
}
