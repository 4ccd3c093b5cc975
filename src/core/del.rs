use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::store::kv::KeyValueStore;
use crate::store::persist::PersistenceAdapter;

/// Resolve a full entry id or a unique prefix against the store.
/// Returns `None` when nothing matches.
pub fn resolve_id(store: &EntryStore, needle: &str) -> AppResult<Option<String>> {
    let matches: Vec<&str> = store
        .list_entries()
        .iter()
        .filter(|e| e.id.starts_with(needle))
        .map(|e| e.id.as_str())
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].to_string())),
        _ => Err(AppError::AmbiguousId(needle.to_string())),
    }
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one entry and persist the remainder. Unknown ids are a safe
    /// no-op; the return value tells the caller whether a row was deleted.
    pub fn apply<K: KeyValueStore>(
        persist: &mut PersistenceAdapter<K>,
        store: &mut EntryStore,
        id: &str,
    ) -> AppResult<bool> {
        let Some(full_id) = resolve_id(store, id)? else {
            return Ok(false);
        };
        store.remove_entry(&full_id);
        persist.save_entries(store.list_entries())?;
        Ok(true)
    }
}

pub struct ResetLogic;

impl ResetLogic {
    /// Clear every entry. The hourly rate is a setting, not tracked data,
    /// and is kept.
    pub fn apply<K: KeyValueStore>(
        persist: &mut PersistenceAdapter<K>,
        store: &mut EntryStore,
    ) -> AppResult<()> {
        store.replace_all(Vec::new());
        persist.clear_entries()
    }
}
