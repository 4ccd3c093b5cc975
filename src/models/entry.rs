use crate::core::math;
use crate::errors::AppResult;
use crate::utils::time::format_display;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed work interval, exactly as it is persisted and rendered.
///
/// `start_time`/`end_time` are kept as already-formatted display strings
/// (`%Y-%m-%d, %H:%M`); `hours` and `price` are computed once at creation
/// and trusted on reload. Entries are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub hourly_rate: f64,
    pub hours: f64,
    pub price: f64,
}

impl Entry {
    /// Build an entry from two instants and a rate, with a fresh id.
    /// Fails with `InvalidInterval` when `end` precedes `start`.
    pub fn from_interval(
        start: DateTime<Local>,
        end: DateTime<Local>,
        rate: f64,
    ) -> AppResult<Self> {
        let hours = math::elapsed_hours(start, end)?;
        let price = math::charge(hours, rate);
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            start_time: format_display(start),
            end_time: format_display(end),
            hourly_rate: rate,
            hours,
            price,
        })
    }

    /// First block of the uuid, enough to address an entry from the CLI.
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}
