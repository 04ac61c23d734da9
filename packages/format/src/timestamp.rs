use chrono::{DateTime, Utc};

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` in UTC.
///
/// Input that does not parse is returned unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw.trim()).map_or_else(
        |_| raw.to_string(),
        |at| at.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
    )
}
