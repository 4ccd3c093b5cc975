//! Persistence adapter: maps the entry store and settings onto the
//! key-value store, with the recovery rules for damaged data.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::EntryStore;
use crate::store::kv::{FileKv, KeyValueStore};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub const ENTRIES_KEY: &str = "time-tracking-data";
pub const RATE_KEY: &str = "hourly-rate";

pub struct PersistenceAdapter<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> PersistenceAdapter<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Load the persisted entries. A missing key or unparseable payload
    /// yields an empty list (with a console warning for the latter); the
    /// stored hours/price values are trusted as-is.
    pub fn load_entries(&self) -> AppResult<Vec<Entry>> {
        let Some(raw) = self.kv.get(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warning(format!("Stored entries are unreadable, starting empty ({e})"));
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full entry sequence. Synchronous: when this returns Ok
    /// the data has been handed to the store.
    pub fn save_entries(&mut self, entries: &[Entry]) -> AppResult<()> {
        let raw = serde_json::to_string(entries)
            .map_err(|e| AppError::PersistenceCorrupt(e.to_string()))?;
        self.kv.set(ENTRIES_KEY, &raw)
    }

    /// Load the persisted hourly rate; missing or unreadable values
    /// default to 0.
    pub fn load_rate(&self) -> AppResult<f64> {
        let Some(raw) = self.kv.get(RATE_KEY)? else {
            return Ok(0.0);
        };
        Ok(raw.trim().parse().unwrap_or(0.0))
    }

    pub fn save_rate(&mut self, rate: f64) -> AppResult<()> {
        if rate < 0.0 {
            return Err(AppError::InvalidRate(rate));
        }
        self.kv.set(RATE_KEY, &rate.to_string())
    }

    pub fn clear_entries(&mut self) -> AppResult<()> {
        self.kv.remove(ENTRIES_KEY)
    }
}

/// Open the configured data file and load the store from it.
pub fn open(cfg: &Config) -> AppResult<(PersistenceAdapter<FileKv>, EntryStore)> {
    let kv = FileKv::new(expand_tilde(&cfg.data_file));
    let persist = PersistenceAdapter::new(kv);
    let mut store = EntryStore::new();
    store.replace_all(persist.load_entries()?);
    Ok((persist, store))
}
