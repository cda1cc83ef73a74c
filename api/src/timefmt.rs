//! Display formatting for the backend's `created_at` strings.

use chrono::NaiveDateTime;

// The backend stores SQLite `CURRENT_TIMESTAMP` values; ISO "T" separators
// are accepted too in case the backend ever switches.
const WIRE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Format a wire timestamp for the feed, e.g. `May 1, 2024 1:45 PM`.
/// Returns `None` when the input does not parse; callers fall back to the
/// raw string.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    WIRE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .map(|ts| ts.format("%b %-d, %Y %-I:%M %p").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sqlite_timestamps() {
        assert_eq!(
            format_timestamp("2024-05-01 13:45:10").as_deref(),
            Some("May 1, 2024 1:45 PM")
        );
        assert_eq!(
            format_timestamp("2024-12-09 09:05:00").as_deref(),
            Some("Dec 9, 2024 9:05 AM")
        );
    }

    #[test]
    fn formats_iso_separator() {
        assert_eq!(
            format_timestamp("2024-05-01T13:45:10").as_deref(),
            Some("May 1, 2024 1:45 PM")
        );
    }

    #[test]
    fn unparseable_input_is_none() {
        assert!(format_timestamp("yesterday").is_none());
        assert!(format_timestamp("").is_none());
        assert!(format_timestamp("2024-05-01").is_none());
    }
}
