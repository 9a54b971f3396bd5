//! Calendar formatting: title, weekday header, and the day grid.

use std::io::Write;

use crate::calendar::{days_in_month, first_column_offset, first_day_of_month};
use crate::error::CalError;
use crate::types::{CalendarRequest, COLUMN_WIDTH, DAYS_PER_WEEK, NameTable, TITLE_INDENT};

/// Title line: indent, full month name, year.
pub fn format_title(req: &CalendarRequest, names: &NameTable) -> String {
    format!(
        "{}{} {}",
        " ".repeat(TITLE_INDENT),
        names.month_name(req.month),
        req.year
    )
}

/// Weekday header: one leading space, then seven width-4 columns of
/// abbreviated names cycling forward from the start weekday.
pub fn format_weekday_header(req: &CalendarRequest, names: &NameTable) -> String {
    let mut line = String::from(" ");
    let mut weekday = req.start;
    for _ in 0..DAYS_PER_WEEK {
        line.push_str(&format!(
            "{:>width$}",
            names.weekday_short(weekday),
            width = COLUMN_WIDTH
        ));
        weekday = weekday.succ();
    }
    line
}

/// Day rows: the first row is padded so day 1 lands in its weekday column,
/// then days wrap to a new row after every 7th occupied column.
pub fn format_day_rows(req: &CalendarRequest) -> Result<Vec<String>, CalError> {
    let n_days = days_in_month(req.year, req.month);
    let first = first_day_of_month(req.year, req.month)?;
    let offset = first_column_offset(first, req.start) as usize;

    let mut rows = Vec::with_capacity(6);
    let mut row = " ".repeat(COLUMN_WIDTH * offset);
    let mut column = offset;

    for day in 1..=n_days {
        row.push_str(&format!("{:>width$}", day, width = COLUMN_WIDTH));
        column += 1;
        if column == DAYS_PER_WEEK {
            rows.push(std::mem::take(&mut row));
            column = 0;
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    Ok(rows)
}

/// Write the complete calendar to `out`.
pub fn render(
    req: &CalendarRequest,
    names: &NameTable,
    out: &mut impl Write,
) -> Result<(), CalError> {
    writeln!(out, "{}", format_title(req, names))?;
    writeln!(out, "{}", format_weekday_header(req, names))?;
    for row in format_day_rows(req)? {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}
