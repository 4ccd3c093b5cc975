//! Pure time arithmetic: elapsed hours, decimal rounding, billing charge.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::fmt;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Round to 2 decimal places, half-up on the decimal value.
///
/// Integer scaling with a small relative guard so that values whose decimal
/// rendering ends in 5 (stored in binary just below the half, e.g. 1.005)
/// still round upward the way they read. Idempotent.
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    let guard = 1e-9 * scaled.abs().max(1.0);
    (scaled + 0.5 + guard).floor() / 100.0
}

/// Elapsed duration between two instants, in hours rounded to 2 decimals.
pub fn elapsed_hours(start: DateTime<Local>, end: DateTime<Local>) -> AppResult<f64> {
    let millis = (end - start).num_milliseconds();
    if millis < 0 {
        return Err(AppError::InvalidInterval(format!(
            "end ({}) is before start ({})",
            end.format("%Y-%m-%d %H:%M:%S"),
            start.format("%Y-%m-%d %H:%M:%S"),
        )));
    }
    Ok(round2(millis as f64 / MILLIS_PER_HOUR))
}

/// Billing charge for `hours` at `rate` per hour.
pub fn charge(hours: f64, rate: f64) -> f64 {
    round2(hours * rate)
}

/// Wall-clock split of a running session, used by the once-per-second
/// display tick. Days are carried separately and are not part of the
/// rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    pub fn from_millis(delta_ms: i64) -> Self {
        let total_seconds = delta_ms.max(0) / 1000;
        Self {
            days: total_seconds / 86_400,
            hours: (total_seconds / 3_600) % 24,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
