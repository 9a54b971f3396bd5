//! Month calendar display utility.
//!
//! Resolves up to three positional arguments (month, year, start weekday)
//! into a `CalendarRequest`, computes the month grid, and renders a title
//! line, weekday header, and day grid.

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;
