use std::collections::HashMap;

use chrono::NaiveDate;
use hireboard_core::{format_display_date, Cell, Table};
use serde::Serialize;

use crate::config::{normalize_token, ColumnMapping};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One interview record from one team's daily report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Trimmed candidate name as written in the report.
    pub candidate_name: String,
    /// Raw interview outcome; `None` when the cell isn't text.
    pub interview: Option<String>,
    /// Raw status; `None` when the cell isn't text.
    pub status: Option<String>,
    /// Derived from the source file name; constant per file.
    pub team_member: String,
    /// Every other column, carried through unchanged.
    pub raw_fields: HashMap<String, Cell>,
}

impl ReportRow {
    pub fn lookup_key(&self) -> Option<LookupKey> {
        LookupKey::new(&self.candidate_name)
    }
}

/// One new-hire record from the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub employee_name: String,
    pub role: Option<String>,
    /// `None` when the cell is empty or doesn't parse as a date.
    pub join_date: Option<NaiveDate>,
    pub raw_fields: HashMap<String, Cell>,
}

impl RosterRow {
    pub fn lookup_key(&self) -> Option<LookupKey> {
        LookupKey::new(&self.employee_name)
    }
}

/// Join key: trimmed, lowercased name. Never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey(String);

impl LookupKey {
    /// `None` for blank names, which never match anything.
    pub fn new(name: &str) -> Option<Self> {
        let key = normalize_token(name);
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A report row that passed the interview, enriched from the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassedCandidate {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Join Date")]
    pub join_date: Option<NaiveDate>,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "Team Member")]
    pub team_member: String,
    /// The name was found on the roster, even if its role and date are blank.
    #[serde(skip)]
    pub matched: bool,
}

impl PassedCandidate {
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Display strings in table column order, dates as `dd-Mon-yyyy`.
    pub fn display_fields(&self) -> [String; 4] {
        [
            self.employee_name.clone(),
            self.join_date.map(format_display_date).unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
            self.team_member.clone(),
        ]
    }
}

/// Column headers of the passed-candidate table.
pub fn passed_headers(columns: &ColumnMapping) -> [String; 4] {
    [
        columns.employee_name.clone(),
        columns.join_date.clone(),
        columns.role.clone(),
        columns.team_member.clone(),
    ]
}

/// Passed candidates as a table. Join dates stay typed so the display
/// normalizer formats them like any other date column.
pub fn passed_table(candidates: &[PassedCandidate], columns: &ColumnMapping) -> Table {
    let rows = candidates
        .iter()
        .map(|c| {
            vec![
                Cell::Text(c.employee_name.clone()),
                c.join_date
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(Cell::DateTime)
                    .unwrap_or(Cell::Empty),
                Cell::from(c.role.clone()),
                Cell::Text(c.team_member.clone()),
            ]
        })
        .collect();
    Table::from_rows(passed_headers(columns), rows)
}

/// A roster lookup key that appears on more than one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    /// Employee name as written on the first occurrence.
    pub employee_name: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub report_rows: usize,
    pub roster_rows: usize,
    pub passed: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Everything one join run produces.
#[derive(Debug, Clone, Serialize)]
pub struct MergeResult {
    pub summary: MatchSummary,
    pub candidates: Vec<PassedCandidate>,
    pub roster_duplicates: Vec<DuplicateKey>,
}
