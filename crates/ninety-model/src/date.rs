//! Tolerant calendar-date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO-ish date string into a calendar date.
///
/// Filing dates are transported as strings and show some format variance
/// across suppliers: a plain `YYYY-MM-DD`, a full RFC 3339 timestamp, or a
/// naive datetime without offset. All three resolve to the calendar date;
/// anything else is `None`. Callers must never fall back to lexical string
/// comparison for ordering.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(
            parse_calendar_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_rfc3339_datetime() {
        assert_eq!(
            parse_calendar_date("2024-03-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            parse_calendar_date("2024-03-15T23:30:00-05:00"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(
            parse_calendar_date("2024-03-15T10:30:00"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date(""), None);
    }
}
