//! In-memory ordered collection of tracked entries plus running aggregates.

pub mod kv;
pub mod persist;

use crate::core::math;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use chrono::{DateTime, Local};

/// Ordered sequence of entries (insertion order = display order) with the
/// store-wide totals cached alongside. The totals are recomputed after every
/// mutation and never persisted; they are always derivable from the entries.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    total_hours: f64,
    total_charge: f64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, compute and append a new entry. Returns the created entry.
    /// On any validation error the store is left unchanged.
    pub fn add_entry(
        &mut self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        rate: f64,
    ) -> AppResult<Entry> {
        if rate < 0.0 {
            return Err(AppError::InvalidRate(rate));
        }
        let entry = Entry::from_interval(start, end, rate)?;
        self.entries.push(entry.clone());
        self.recompute();
        Ok(entry)
    }

    /// Remove the entry with the given id. Unknown ids are a safe no-op
    /// (deleting an already-removed row must not fail).
    pub fn remove_entry(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.recompute();
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn total_charge(&self) -> f64 {
        self.total_charge
    }

    /// Read-only snapshot in insertion order.
    pub fn list_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole store with persisted entries, trusting their stored
    /// hours and price as-is. Only the aggregates are recomputed.
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.recompute();
    }

    fn recompute(&mut self) {
        // per-entry values are already 2-decimal; the outer round2 only
        // cleans float accumulation noise
        self.total_hours = math::round2(self.entries.iter().map(|e| e.hours).sum::<f64>());
        self.total_charge = math::round2(self.entries.iter().map(|e| e.price).sum::<f64>());
    }
}
