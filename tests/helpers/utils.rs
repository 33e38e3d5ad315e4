use chrono::{Datelike, Duration, NaiveDate, Utc};

/// A birthday string whose month and day land `offset` days from today.
/// The year 1992 is a leap year, so every month/day combination is a
/// valid calendar date there, including Feb 29.
pub fn birthday_in_days(offset: i64) -> String {
    let target = today() + Duration::days(offset);
    format!("1992-{:02}-{:02}", target.month(), target.day())
}

pub fn today() -> NaiveDate {
    Utc::today().naive_utc()
}
