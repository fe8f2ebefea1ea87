use crate::types::{DigestError, Result};
use chrono::{DateTime, Days, NaiveDate};

/// Date component of a feed timestamp such as `2024-06-10T08:00:00+00:00`,
/// or of an RSS `pubDate` (`Mon, 10 Jun 2024 08:00:00 GMT`).
/// Time of day and offset are ignored: the date is the one written in the feed.
pub fn parse_published_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or_default().trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|iso_err| {
            DateTime::parse_from_rfc2822(raw.trim())
                .map(|dt| dt.date_naive())
                .map_err(|_| iso_err)
        })
        .map_err(|e| DigestError::DateParse {
            raw: raw.to_string(),
            reason: e.to_string(),
        })
}

/// First date still inside a window of `window_days` ending on `reference`.
pub fn window_start(reference: NaiveDate, window_days: u32) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// True iff `date >= reference - window_days`. Both ends are inclusive,
/// so anything published today or on the first day of the window passes.
pub fn is_recent(date: NaiveDate, reference: NaiveDate, window_days: u32) -> bool {
    date >= window_start(reference, window_days)
}
