use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

// ── Month-granularity parsing ─────────────────────────────────────────────────

/// Naive date-time layouts tried after RFC 3339.
const DATETIME_FMTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a date string and normalise it to the first day of its month.
///
/// Accepted forms, in order:
/// * RFC 3339 (`"2018-01-01T00:00:00+01:00"`, `"...Z"`). The calendar month
///   is read in the stamp's own offset, never shifted to UTC, so midnight on
///   the 1st stays in that month.
/// * Naive date-times (`"2018-01-01T00:00:00"`, `"2018-01-01 00:00:00"`).
/// * Plain dates (`"2018-01-15"`) and year-months (`"2018-01"`).
///
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let date = DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            DATETIME_FMTS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|naive| naive.date())
        })
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok());

    match date {
        Some(d) => month_start(d),
        None => {
            warn!("parse_month: could not parse date \"{}\"", s);
            None
        }
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

// ── Month arithmetic ──────────────────────────────────────────────────────────

/// Calendar-month difference between two dates; day-of-month is ignored.
///
/// Negative when `end` falls in an earlier month than `start`.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

/// Render a date as `"YYYY-MM"` for logs and debug output.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── parse_month ──────────────────────────────────────────────────────────

    #[test]
    fn test_parse_month_rfc3339_with_offset() {
        let d = parse_month("2016-01-01T00:00:00+01:00").unwrap();
        assert_eq!(d, ymd(2016, 1, 1));
    }

    #[test]
    fn test_parse_month_keeps_local_month() {
        // In UTC this instant is 2015-12-31T23:00, the local month must win.
        let d = parse_month("2016-01-01T00:00:00+01:00").unwrap();
        assert_eq!(d.year(), 2016);
        assert_eq!(d.month(), 1);
    }

    #[test]
    fn test_parse_month_z_suffix() {
        assert_eq!(parse_month("2018-05-01T00:00:00Z"), Some(ymd(2018, 5, 1)));
    }

    #[test]
    fn test_parse_month_naive_datetime() {
        assert_eq!(parse_month("2018-05-01T10:30:00"), Some(ymd(2018, 5, 1)));
        assert_eq!(parse_month("2018-05-01 10:30:00"), Some(ymd(2018, 5, 1)));
    }

    #[test]
    fn test_parse_month_plain_date_drops_day() {
        assert_eq!(parse_month("2018-05-17"), Some(ymd(2018, 5, 1)));
    }

    #[test]
    fn test_parse_month_year_month() {
        assert_eq!(parse_month("2019-09"), Some(ymd(2019, 9, 1)));
    }

    #[test]
    fn test_parse_month_trims_whitespace() {
        assert_eq!(parse_month("  2019-09  "), Some(ymd(2019, 9, 1)));
    }

    #[test]
    fn test_parse_month_empty_returns_none() {
        assert!(parse_month("").is_none());
        assert!(parse_month("   ").is_none());
    }

    #[test]
    fn test_parse_month_garbage_returns_none() {
        assert!(parse_month("not-a-date").is_none());
        assert!(parse_month("2018-13").is_none());
        assert!(parse_month("01/05/2018").is_none());
    }

    // ── month_span ───────────────────────────────────────────────────────────

    #[test]
    fn test_month_span_same_year() {
        assert_eq!(month_span(ymd(2018, 1, 1), ymd(2018, 10, 1)), 9);
    }

    #[test]
    fn test_month_span_across_years() {
        assert_eq!(month_span(ymd(2018, 5, 1), ymd(2019, 9, 1)), 16);
    }

    #[test]
    fn test_month_span_ignores_day_of_month() {
        assert_eq!(month_span(ymd(2018, 1, 31), ymd(2018, 2, 1)), 1);
        assert_eq!(month_span(ymd(2018, 1, 1), ymd(2018, 1, 31)), 0);
    }

    #[test]
    fn test_month_span_reversed_is_negative() {
        assert_eq!(month_span(ymd(2019, 1, 1), ymd(2018, 11, 1)), -2);
    }

    // ── month_start / format_month ───────────────────────────────────────────

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(ymd(2020, 2, 29)), Some(ymd(2020, 2, 1)));
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(ymd(2017, 6, 1)), "2017-06");
    }
}
