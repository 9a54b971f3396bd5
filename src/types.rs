//! Type definitions and constants for calendar formatting.

use chrono::{Duration, NaiveDate, Weekday};

/// Width of one day column in the grid.
pub const COLUMN_WIDTH: usize = 4;
/// Leading spaces before the month name in the title line.
pub const TITLE_INDENT: usize = 5;
pub const DAYS_PER_WEEK: usize = 7;

/// A validated request for one month's calendar.
///
/// Built once per invocation and passed by reference through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRequest {
    /// Month number, 1-12.
    pub month: u32,
    pub year: i32,
    /// Weekday occupying the first column of the grid.
    pub start: Weekday,
}

/// Display names for months and weekdays, keyed by index (Monday first).
///
/// Injectable so rendering is deterministic regardless of host locale.
#[derive(Debug, Clone)]
pub struct NameTable {
    pub months: [String; 12],
    pub weekdays: [String; 7],
    pub weekdays_short: [String; 7],
}

impl NameTable {
    /// English names derived from chrono's default formatting.
    pub fn english() -> Self {
        // 2000-01-03 is a Monday; offsets walk Mon..Sun.
        let monday = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();

        let weekdays = std::array::from_fn(|i| {
            (monday + Duration::days(i as i64)).format("%A").to_string()
        });
        let weekdays_short = std::array::from_fn(|i| {
            (monday + Duration::days(i as i64)).format("%a").to_string()
        });
        let months = std::array::from_fn(|i| {
            NaiveDate::from_ymd_opt(2000, i as u32 + 1, 1)
                .unwrap()
                .format("%B")
                .to_string()
        });

        NameTable {
            months,
            weekdays,
            weekdays_short,
        }
    }

    /// Full month name for a month number (1-12).
    pub fn month_name(&self, month: u32) -> &str {
        &self.months[(month - 1) as usize]
    }

    /// Abbreviated weekday name, Monday=0..Sunday=6.
    pub fn weekday_short(&self, weekday: Weekday) -> &str {
        &self.weekdays_short[weekday.num_days_from_monday() as usize]
    }

    /// Case-insensitive lookup of a full weekday name.
    pub fn parse_weekday(&self, s: &str) -> Option<Weekday> {
        self.weekdays
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(|i| weekday_from_monday_index(i as u32))
    }
}

impl Default for NameTable {
    fn default() -> Self {
        NameTable::english()
    }
}

/// Weekday for a 0-based offset from Monday.
pub fn weekday_from_monday_index(idx: u32) -> Weekday {
    match idx % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        6 => Weekday::Sun,
        _ => unreachable!(),
    }
}
