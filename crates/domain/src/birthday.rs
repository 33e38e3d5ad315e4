//! Date arithmetic for yearly recurring birthdays.
//!
//! A birthday is stored as a full calendar date, but only the month and
//! day drive the recurrence. The year a friend was born is kept for
//! display purposes only.

use chrono::prelude::*;
use chrono::Duration;

/// Parses and validates a `YYYY-MM-DD` date string
pub fn parse_birthday(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    if year.is_err() || month.is_err() || day.is_err() {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let year = year.unwrap();
    if !(1900..=2100).contains(&year) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month.unwrap(), day.unwrap())
        .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

/// The birthday's occurrence in the given year. A Feb 29 birthday lands
/// on Mar 1 in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd(year, 3, 1))
}

/// The nearest occurrence of the birthday that is today or later. If this
/// year's occurrence has already passed it rolls over to next year.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = occurrence_in_year(birthday, today.year());
    if candidate < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        candidate
    }
}

/// The date at which a reminder for the next occurrence should fire,
/// `lead_days` days ahead of it.
pub fn upcoming_reminder_date(birthday: NaiveDate, today: NaiveDate, lead_days: i64) -> NaiveDate {
    next_occurrence(birthday, today) - Duration::days(lead_days)
}

/// Whether the reminder fires today. The window is a single day: a
/// reminder date in the past does not fire.
pub fn is_reminder_due(birthday: NaiveDate, today: NaiveDate, lead_days: i64) -> bool {
    upcoming_reminder_date(birthday, today, lead_days) == today
}

/// Whole days between today and the next occurrence of the birthday
pub fn days_until_birthday(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birthday, today) - today).num_days()
}
