//! Created-date display formatting.
//!
//! # Responsibility
//! - Turn a note's `created` timestamp into the list's display string.
//!
//! # Invariants
//! - Pure display derivation; no state, no caching.
//! - Output uses the local timezone of the session.

use chrono::{DateTime, Local, TimeZone, Utc};

const CREATED_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Formats a `created` timestamp (epoch milliseconds) as `DD/MM/YY, HH:MM`
/// in the local timezone.
///
/// Out-of-range timestamps yield an empty string rather than an error; the
/// value is display-only and nothing downstream depends on it.
pub fn format_created(created_ms: i64) -> String {
    format_created_in(created_ms, &Local)
}

fn format_created_in<Tz: TimeZone>(created_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::<Utc>::from_timestamp_millis(created_ms)
        .map(|dt| dt.with_timezone(tz).format(CREATED_FORMAT).to_string())
        .unwrap_or_default()
}
