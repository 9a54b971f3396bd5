//! Calendar arithmetic: month lengths and weekday positions.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalError;

/// Gregorian leap year rule: divisible by 4, except centuries unless
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Weekday of day 1 of the given month.
pub fn first_day_of_month(year: i32, month: u32) -> Result<Weekday, CalError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday())
        .ok_or(CalError::DateOutOfRange { year, month })
}

/// Zero-based grid column (0..6) where day 1 falls when `start` occupies
/// the first column.
pub fn first_column_offset(first: Weekday, start: Weekday) -> u32 {
    (first.number_from_monday() as i32 - start.number_from_monday() as i32).rem_euclid(7) as u32
}
