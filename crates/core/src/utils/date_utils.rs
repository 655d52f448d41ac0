use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Returns true when both instants fall in the same calendar month of
/// the same year.
///
/// This is the single source of truth for "current month" checks used
/// by category limits and budget reporting.
pub fn same_calendar_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Builds a date in the given year/month, clamping the day to the last
/// valid day of that month (e.g. day 31 in February becomes the 28th
/// or 29th).
///
/// Returns `None` only when the year/month pair itself is out of range.
pub fn date_with_clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
}

/// Returns the first and last day of the calendar month preceding
/// `today`.
pub fn previous_month_range(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?.pred_opt()?;
    Some((start, end))
}

/// Returns the year/month pair one calendar month after the given one.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
