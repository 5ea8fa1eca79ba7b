//! Display helpers for server timestamps.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::DateTime;

/// `Created <Mon D, YYYY>` for an RFC 3339 timestamp, `Created Unknown`
/// when the value is missing or unparseable.
pub fn created_label(created_at: Option<&str>) -> String {
    created_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map_or_else(|| "Created Unknown".to_owned(), |dt| format!("Created {}", dt.format("%b %-d, %Y")))
}
