//! Date handling for index records.
//!
//! Dates travel through the system as strings: front matter declares them,
//! the index stores them, and the reader displays them. Parsing happens
//! only at the sort boundary and is deliberately tolerant - an article with
//! an unparseable date keeps its encounter position instead of failing the
//! build.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::cmp::Ordering;

/// Current UTC timestamp in ISO-8601 with millisecond precision.
///
/// Used when front matter omits `date` and no prior index entry exists.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a date string into a sort key.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as
/// midnight UTC). Anything else yields `None`.
pub fn sort_key(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Compare two date strings for newest-first ordering.
///
/// Unparseable dates compare equal so a stable sort keeps their original
/// encounter order.
pub fn compare_desc(a: &str, b: &str) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        _ => Ordering::Equal,
    }
}

/// Calendar-date prefix of a stored date string, for display.
///
/// `2024-01-15T10:30:00.000Z` → `2024-01-15`. Strings that do not look
/// like an ISO date are returned unchanged.
pub fn display_date(s: &str) -> &str {
    match s.get(..10) {
        Some(prefix) if sort_key(prefix).is_some() => prefix,
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_shape() {
        let now = now_iso8601();
        // "2024-01-15T10:30:00.000Z"
        assert!(now.ends_with('Z'));
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], "T");
        assert!(sort_key(&now).is_some());
    }

    #[test]
    fn test_sort_key_bare_date() {
        let key = sort_key("2024-01-15").unwrap();
        assert_eq!(key.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_sort_key_rfc3339() {
        assert!(sort_key("2024-01-15T10:30:00Z").is_some());
        assert!(sort_key("2024-01-15T10:30:00.123Z").is_some());
        assert!(sort_key("2024-01-15T10:30:00+08:00").is_some());
    }

    #[test]
    fn test_sort_key_rejects_garbage() {
        assert!(sort_key("").is_none());
        assert!(sort_key("yesterday").is_none());
        assert!(sort_key("2024-13-01").is_none());
        assert!(sort_key("2024/01/15").is_none());
    }

    #[test]
    fn test_compare_desc_orders_newest_first() {
        assert_eq!(compare_desc("2024-02-01", "2024-01-01"), Ordering::Less);
        assert_eq!(compare_desc("2024-01-01", "2024-02-01"), Ordering::Greater);
        assert_eq!(compare_desc("2024-01-01", "2024-01-01"), Ordering::Equal);
    }

    #[test]
    fn test_compare_desc_mixed_precision() {
        // A timestamp later the same day sorts before the bare date
        assert_eq!(
            compare_desc("2024-01-01T12:00:00Z", "2024-01-01"),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_desc_unparseable_keeps_order() {
        assert_eq!(compare_desc("soon", "2024-01-01"), Ordering::Equal);
        assert_eq!(compare_desc("soon", "later"), Ordering::Equal);
    }

    #[test]
    fn test_display_date_strips_time() {
        assert_eq!(display_date("2024-01-15T10:30:00.000Z"), "2024-01-15");
        assert_eq!(display_date("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn test_display_date_passthrough() {
        assert_eq!(display_date("soon"), "soon");
        assert_eq!(display_date(""), "");
    }
}
