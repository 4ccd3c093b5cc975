use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::EntryStore;
use crate::store::kv::KeyValueStore;
use crate::store::persist::PersistenceAdapter;
use crate::ui::adapter::FormInterval;
use crate::utils::time::parse_input;

/// High-level business logic for the `add` command: the manual form path,
/// with explicit start/end values instead of the live timer. Converges on
/// the same validation and computation as the timer path.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<K: KeyValueStore>(
        persist: &mut PersistenceAdapter<K>,
        store: &mut EntryStore,
        form: &FormInterval,
    ) -> AppResult<Entry> {
        //
        // 1. Parse the raw field values
        //
        let start = parse_input(&form.start)
            .ok_or_else(|| AppError::InvalidDateTime(form.start.clone()))?;
        let end =
            parse_input(&form.end).ok_or_else(|| AppError::InvalidDateTime(form.end.clone()))?;

        //
        // 2. Resolve the rate (explicit value, or the saved setting)
        //
        let rate = match form.rate {
            Some(r) => r,
            None => persist.load_rate()?,
        };

        //
        // 3. Append and persist
        //
        let entry = store.add_entry(start, end, rate)?;
        persist.save_entries(store.list_entries())?;

        Ok(entry)
    }
}
