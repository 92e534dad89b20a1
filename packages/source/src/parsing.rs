//! Shared date parsing for upstream payloads.
//!
//! FEMA timestamps arrive as RFC 3339 (`"2024-01-15T00:00:00.000Z"`), NWS
//! alerts carry zone offsets, and fixture data uses bare dates. Everything
//! funnels through one permissive parser.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Parses an upstream date string in any of the shapes government APIs use.
///
/// Tries RFC 3339 first, then a naive datetime with optional fractional
/// seconds, then a bare `YYYY-MM-DD` date (midnight UTC). Returns `None`
/// for anything else.
#[must_use]
pub fn parse_upstream_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Extracts the calendar year from an upstream date string, if it parses.
#[must_use]
pub fn parse_year(s: &str) -> Option<i32> {
    parse_upstream_date(s).map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_upstream_date("2024-01-15T00:00:00.000Z").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 00:00:00 UTC");
    }

    #[test]
    fn parses_offset_datetime() {
        let dt = parse_upstream_date("2024-06-01T14:30:00-05:00").unwrap();
        assert_eq!(dt.to_string(), "2024-06-01 19:30:00 UTC");
    }

    #[test]
    fn parses_naive_datetime() {
        let dt = parse_upstream_date("2024-01-15T14:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 14:30:00 UTC");
    }

    #[test]
    fn parses_bare_date() {
        let dt = parse_upstream_date("2023-09-10").unwrap();
        assert_eq!(dt.to_string(), "2023-09-10 00:00:00 UTC");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_upstream_date("not-a-date").is_none());
        assert!(parse_upstream_date("").is_none());
    }

    #[test]
    fn extracts_year() {
        assert_eq!(parse_year("2021-07-04T12:00:00Z"), Some(2021));
        assert_eq!(parse_year("nope"), None);
    }
}
