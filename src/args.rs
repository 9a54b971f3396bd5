//! Command-line argument parsing and resolution using clap.
//!
//! Arguments are positional: `mcal [month] [year] [weekday]`. Missing
//! arguments default to the current date and a Monday week start.

use chrono::{Datelike, Weekday};
use clap::{Parser, ValueHint};

use crate::error::CalError;
use crate::types::{CalendarRequest, NameTable};

#[derive(Parser, Debug)]
#[command(name = "mcal")]
#[command(about = "Displays a text calendar for one month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12) - optional, defaults to the current month.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other,
          allow_negative_numbers = true)]
    pub month_arg: Option<String>,

    /// Year - optional, defaults to the current year. May be negative.
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other,
          allow_negative_numbers = true)]
    pub year_arg: Option<String>,

    /// First day of the week (MONDAY..SUNDAY) - optional, defaults to MONDAY.
    #[arg(index = 3, default_value = None, value_name = "weekday", value_hint = ValueHint::Other)]
    pub weekday_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Print a one-month calendar.

Without any arguments, display the current month starting on Monday.

Examples:
  mcal                   Display current month
  mcal 2                 Display February of the current year
  mcal 2 2026            Display February 2026
  mcal 2 2026 sunday     Display February 2026 with Sunday first";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Resolve positional arguments into a validated request, substituting
/// current-date defaults for missing ones.
pub fn resolve(args: &Args, names: &NameTable) -> Result<CalendarRequest, CalError> {
    let today = get_today_date();

    let month = match &args.month_arg {
        Some(s) => parse_month(s)?,
        None => today.month(),
    };
    let year = match &args.year_arg {
        Some(s) => parse_year(s)?,
        None => today.year(),
    };
    let start = match &args.weekday_arg {
        Some(s) => parse_weekday(s, names)?,
        None => Weekday::Mon,
    };

    Ok(CalendarRequest { month, year, start })
}

fn parse_month(s: &str) -> Result<u32, CalError> {
    let month: i64 = s
        .parse()
        .map_err(|_| CalError::validation("Month must be a number"))?;
    if month < 1 {
        return Err(CalError::validation("Month cannot be less than 1"));
    }
    if month > 12 {
        return Err(CalError::validation("Month cannot be greater than 12"));
    }
    Ok(month as u32)
}

fn parse_year(s: &str) -> Result<i32, CalError> {
    s.parse()
        .map_err(|_| CalError::validation("year must be an integer"))
}

fn parse_weekday(s: &str, names: &NameTable) -> Result<Weekday, CalError> {
    names
        .parse_weekday(s)
        .ok_or_else(|| CalError::validation("Day of the week is not valid"))
}

/// Get today's date, respecting MCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("MCAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
