//! Date fields as they show up in bank and budgeting-app exports.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 2026-02-16
    "%Y/%m/%d", // 2026/02/16
    // %Y would read "26" as year 26, so the two-digit form goes first
    "%m/%d/%y", // 02/16/26
    "%m/%d/%Y", // 02/16/2026
    "%d.%m.%Y", // 16.02.2026
    "%b %d, %Y", // Feb 16, 2026
    "%B %d, %Y", // February 16, 2026
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a date field, keeping only the calendar date of timestamps.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
