//! Parsing for the loosely formatted date columns returned by the record store

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a due/payment date column.
///
/// Accepts an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// timestamp (read as UTC), or a bare `YYYY-MM-DD` date (midnight UTC).
/// Returns `None` for empty or unparseable input.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
