//! Date labels for forecast rows.

use chrono::{Datelike, Duration, NaiveDate};

/// Label for a forecast date relative to `today`:
/// "Today", "Tomorrow", or the short weekday name.
pub fn day_name(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Short month-day label, e.g. "Mar 7".
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}
