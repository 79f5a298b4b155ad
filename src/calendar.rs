// src/calendar.rs

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

/// Date window surrounding the target's month: from the first day of the
/// previous month to the first day of the month after next. Both bounds are
/// meant as exclusive, so the window covers three whole calendar months
/// minus its first day. Year rollover comes free from calendar-month
/// arithmetic.
pub fn month_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let start = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    let end = first.checked_add_months(Months::new(2)).unwrap_or(first);
    (start, end)
}

/// A log page may only be served from cache once the log has been quiet for
/// at least `threshold_secs`; anything fresher is still being written to.
pub fn cacheable(updated: DateTime<Utc>, now: DateTime<Utc>, threshold_secs: u64) -> bool {
    now.signed_duration_since(updated) >= Duration::seconds(threshold_secs as i64)
}
