// Header and date normalization for loaded tables
//
// Header trimming runs on every table at load time. Date formatting is a
// display-only pass: it never feeds the join, which works on parsed dates.

use chrono::NaiveDate;

use crate::cell::Cell;
use crate::dates::{format_display_date, parse_loose_date};
use crate::table::Table;

/// Strip surrounding whitespace from every column name.
pub fn trim_headers(table: &mut Table) {
    let trimmed: Vec<String> = table.headers().iter().map(|h| h.trim().to_string()).collect();
    for (col, name) in trimmed.into_iter().enumerate() {
        table.set_header(col, name);
    }
}

/// Trimmed text content of a cell. Non-text cells yield `None`.
pub fn trimmed_text(cell: &Cell) -> Option<&str> {
    cell.as_text().map(str::trim)
}

/// Calendar date carried by a cell: date cells directly, text cells via
/// [`parse_loose_date`]. Everything else is `None`.
pub fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Text(s) => parse_loose_date(s),
        _ => None,
    }
}

/// How a column should be rewritten for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateColumn {
    /// Every non-empty cell is already a date value.
    Typed,
    /// Mixed/text column where at least one cell parses as a date.
    Parsed,
    /// Leave as-is.
    Untouched,
}

fn classify_column(table: &Table, col: usize) -> DateColumn {
    let mut any_value = false;
    let mut all_dates = true;
    let mut any_text = false;
    let mut any_parsed = false;

    for cell in table.column(col) {
        match cell {
            Cell::Empty => continue,
            Cell::DateTime(_) => any_parsed = true,
            Cell::Text(s) => {
                all_dates = false;
                any_text = true;
                if parse_loose_date(s).is_some() {
                    any_parsed = true;
                }
            }
            _ => all_dates = false,
        }
        any_value = true;
    }

    if any_value && all_dates {
        DateColumn::Typed
    } else if any_text && any_parsed {
        DateColumn::Parsed
    } else {
        DateColumn::Untouched
    }
}

/// Return a copy of `table` with date columns rendered as `dd-Mon-yyyy` text.
///
/// Typed date columns are formatted cell by cell. Text columns where at least
/// one value parses are rewritten wholesale: parseable cells become the
/// formatted date, the rest (numbers included) become empty. Columns with no parseable value are
/// left untouched. No row is ever dropped.
pub fn format_dates(table: &Table) -> Table {
    let mut out = table.clone();

    for col in 0..table.headers().len() {
        let values: Vec<Cell> = match classify_column(table, col) {
            DateColumn::Untouched => continue,
            DateColumn::Typed => table
                .column(col)
                .map(|cell| match cell {
                    Cell::DateTime(dt) => Cell::Text(format_display_date(dt.date())),
                    other => other.clone(),
                })
                .collect(),
            // Numbers and booleans carry no date here, so they blank too
            DateColumn::Parsed => table
                .column(col)
                .map(|cell| cell_date(cell).map(format_display_date).into())
                .collect(),
        };
        out.replace_column(col, values);
    }

    out
}
