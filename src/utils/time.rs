//! Time utilities: parsing form-style datetimes, display formatting.

use chrono::{DateTime, Local, NaiveDateTime};

/// Format used by the persisted and rendered start/end columns.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d, %H:%M";

/// Format accepted on manual input (same shape as an HTML datetime-local
/// field, which is where these values originally came from).
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Parse a `YYYY-MM-DDTHH:mm` string into a local instant.
pub fn parse_input(s: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), INPUT_FORMAT).ok()?;
    // earliest() picks the first valid instant across DST transitions
    naive.and_local_timezone(Local).earliest()
}

pub fn format_display(dt: DateTime<Local>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
