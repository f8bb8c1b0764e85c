//! Lenient timestamp parsing for posted-at values
//!
//! Snapshot data carries posting dates in several shapes depending on which
//! upstream board they were scraped from. Anything unparsable is treated as
//! "unknown recency" by the callers, never as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a posted-at string into a UTC timestamp.
///
/// Accepts RFC 3339 (`2026-07-30T12:00:00Z`, with or without offset),
/// zone-less date-times (`2026-07-30 12:00:00`, `2026-07-30T12:00:00`)
/// and bare dates (`2026-07-30`, taken as midnight UTC).
pub fn parse_posted_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_posted_at("2026-07-30T12:34:56Z").unwrap();
        assert_eq!(ts.year(), 2026);
        assert_eq!(ts.month(), 7);
        assert_eq!(ts.day(), 30);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_posted_at("2026-07-30T00:30:00+02:00").unwrap();
        // Shifted back into the previous UTC day
        assert_eq!(ts.day(), 29);
    }

    #[test]
    fn test_parse_zoneless_datetime() {
        assert!(parse_posted_at("2026-07-30 09:00:00").is_some());
        assert!(parse_posted_at("2026-07-30T09:00:00").is_some());
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_posted_at("2026-07-30").unwrap();
        assert_eq!(ts.time(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_posted_at("").is_none());
        assert!(parse_posted_at("   ").is_none());
        assert!(parse_posted_at("yesterday").is_none());
        assert!(parse_posted_at("30/07/2026").is_none());
    }
}
