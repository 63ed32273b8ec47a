// Spreadsheet import (xlsx, xls, xlsb, ods) into a `Table`
//
// One-way conversion: the first worksheet is read, its first row becomes the
// header, every following non-blank row becomes a data row.

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use hireboard_core::normalize::trim_headers;
use hireboard_core::{Cell, Table};

/// Maximum dimensions read from a sheet (prevents runaway memory on huge files)
pub const MAX_ROWS: usize = 65536;
pub const MAX_COLS: usize = 256;

/// A first worksheet read into a `Table`, plus what the size caps cut off.
#[derive(Debug, Default)]
pub struct SheetImport {
    pub table: Table,
    /// Data rows past `MAX_ROWS` that were not read.
    pub truncated_rows: usize,
    /// Columns past `MAX_COLS` that were not read.
    pub truncated_cols: usize,
}

impl SheetImport {
    pub fn is_truncated(&self) -> bool {
        self.truncated_rows > 0 || self.truncated_cols > 0
    }

    /// Human-readable note on the truncation, if any.
    pub fn truncation_warning(&self) -> Option<String> {
        if !self.is_truncated() {
            return None;
        }
        Some(format!(
            "sheet truncated to {MAX_ROWS} rows x {MAX_COLS} columns; {} rows and {} columns were not read",
            self.truncated_rows, self.truncated_cols
        ))
    }
}

/// Read the first worksheet of a spreadsheet file.
///
/// Header names are trimmed; blank header cells become `Unnamed: <index>`
/// and repeated names get a `.1`, `.2`, ... suffix.
pub fn import_first_sheet(path: &Path) -> Result<SheetImport, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open spreadsheet: {e}"))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| format!("failed to read first sheet: {e}"))?,
        None => return Err("spreadsheet contains no sheets".to_string()),
    };

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        // A sheet with nothing on it is a valid, empty table
        return Ok(SheetImport::default());
    };

    let width = header_row.len().min(MAX_COLS);
    let data_rows = range.height().saturating_sub(1);
    let mut import = SheetImport {
        truncated_rows: data_rows.saturating_sub(MAX_ROWS),
        truncated_cols: header_row.len().saturating_sub(MAX_COLS),
        ..Default::default()
    };

    let headers: Vec<String> = header_row
        .iter()
        .take(width)
        .enumerate()
        .map(|(idx, cell)| {
            let name = convert_cell(cell).display();
            if name.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            }
        })
        .collect();

    let mut table = Table::new(headers);
    for row in rows.take(MAX_ROWS) {
        let cells: Vec<Cell> = row.iter().take(width).map(convert_cell).collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }

    trim_headers(&mut table);
    rename_repeated_headers(&mut table);
    import.table = table;
    Ok(import)
}

/// Second and later copies of a header name become `<name>.<n>`, skipping
/// any suffix already taken by another column. The first copy keeps its name.
fn rename_repeated_headers(table: &mut Table) {
    let original: HashSet<String> = table.headers().iter().cloned().collect();
    let mut taken: HashSet<String> = HashSet::new();

    for col in 0..table.headers().len() {
        let name = table.headers()[col].clone();
        if taken.insert(name.clone()) {
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{name}.{n}");
            if !original.contains(&candidate) && !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(renamed.clone());
        table.set_header(col, renamed);
    }
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::DateTime(ndt),
            // Out-of-range serials stay visible rather than vanishing
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Text(s.clone()),
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
