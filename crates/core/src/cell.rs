use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dates::DISPLAY_DATE_FORMAT;

/// A single loosely-typed spreadsheet value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Cell::DateTime(_))
    }

    /// Borrow the string content; `None` for anything that isn't text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text cells trimmed of surrounding whitespace, everything else unchanged.
    pub fn trimmed(&self) -> Cell {
        match self {
            Cell::Text(s) => Cell::Text(s.trim().to_string()),
            other => other.clone(),
        }
    }

    /// Value as shown in a table. Integral numbers drop their decimals,
    /// dates use the dashboard's `dd-Mon-yyyy` format.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Cell::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
            Cell::DateTime(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}
