//! Time utilities: resolving "today" for the weekly window.

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone name like "America/Chicago".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Calendar date of `now` as seen in `tz`, or in the system zone when `tz` is None.
pub fn local_date(now: DateTime<Utc>, tz: Option<&str>) -> Result<NaiveDate> {
    match tz {
        Some(name) => {
            let tz = parse_timezone(name)?;
            Ok(now.with_timezone(&tz).date_naive())
        }
        None => Ok(now.with_timezone(&Local).date_naive()),
    }
}

/// Today's date for the weekly window.
pub fn today(tz: Option<&str>) -> Result<NaiveDate> {
    local_date(Utc::now(), tz)
}

/// Parse a `--today` override (YYYY-MM-DD).
pub fn parse_reference_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}
