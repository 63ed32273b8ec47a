use std::collections::HashMap;

use hireboard_core::normalize::{cell_date, trimmed_text};
use hireboard_core::{Cell, Table};
use tracing::{debug, warn};

use crate::config::{ColumnMapping, MergeConfig};
use crate::error::{MergeError, TableKind};
use crate::matcher::{match_passed_candidates, roster_duplicates};
use crate::model::{MatchSummary, MergeResult, PassedCandidate, ReportRow, RosterRow};

/// Run the join over loaded tables. Returns candidates, duplicates and a summary.
pub fn run(reports: &Table, roster: &Table, config: &MergeConfig) -> Result<MergeResult, MergeError> {
    let report_rows = load_report_rows(reports, &config.columns)?;
    let roster_rows = load_roster_rows(roster, &config.columns)?;

    let candidates = match_passed_candidates(&report_rows, &roster_rows, &config.pass_rule);
    let duplicates = roster_duplicates(&roster_rows);
    for dup in &duplicates {
        warn!(
            employee = %dup.employee_name,
            occurrences = dup.occurrences,
            "duplicate roster name; last row wins"
        );
    }

    let matched = candidates.iter().filter(|c| c.is_matched()).count();
    let summary = MatchSummary {
        report_rows: report_rows.len(),
        roster_rows: roster_rows.len(),
        passed: candidates.len(),
        matched,
        unmatched: candidates.len() - matched,
    };
    debug!(?summary, "join complete");

    Ok(MergeResult {
        summary,
        candidates,
        roster_duplicates: duplicates,
    })
}

/// Filter + join only, for callers that just want the passed list.
pub fn build_passed_candidates(
    reports: &Table,
    roster: &Table,
    config: &MergeConfig,
) -> Result<Vec<PassedCandidate>, MergeError> {
    let report_rows = load_report_rows(reports, &config.columns)?;
    let roster_rows = load_roster_rows(roster, &config.columns)?;
    Ok(match_passed_candidates(&report_rows, &roster_rows, &config.pass_rule))
}

/// Resolve a required column or fail with its name.
fn require(table: &Table, kind: TableKind, name: &str) -> Result<usize, MergeError> {
    table.column_index(name).ok_or_else(|| MergeError::MissingColumn {
        table: kind,
        column: name.into(),
    })
}

fn raw_fields(table: &Table, row: &[Cell], used: &[usize]) -> HashMap<String, Cell> {
    table
        .headers()
        .iter()
        .enumerate()
        .filter(|(i, _)| !used.contains(i))
        .map(|(i, h)| (h.clone(), row[i].clone()))
        .collect()
}

/// Typed report rows. A table with no columns at all (nothing loaded)
/// yields no rows; any other table must carry every required column.
pub fn load_report_rows(table: &Table, col: &ColumnMapping) -> Result<Vec<ReportRow>, MergeError> {
    if table.has_no_columns() {
        return Ok(Vec::new());
    }

    let kind = TableKind::DailyReports;
    let interview_idx = require(table, kind, &col.interview)?;
    let status_idx = require(table, kind, &col.status)?;
    let name_idx = require(table, kind, &col.candidate_name)?;
    let team_idx = require(table, kind, &col.team_member)?;
    let used = [interview_idx, status_idx, name_idx, team_idx];

    let rows = table
        .rows()
        .iter()
        .map(|row| ReportRow {
            candidate_name: row[name_idx].display().trim().to_string(),
            interview: trimmed_text(&row[interview_idx]).map(str::to_string),
            status: trimmed_text(&row[status_idx]).map(str::to_string),
            team_member: row[team_idx].display(),
            raw_fields: raw_fields(table, row, &used),
        })
        .collect();

    Ok(rows)
}

/// Typed roster rows, same empty-table rule as [`load_report_rows`].
pub fn load_roster_rows(table: &Table, col: &ColumnMapping) -> Result<Vec<RosterRow>, MergeError> {
    if table.has_no_columns() {
        return Ok(Vec::new());
    }

    let kind = TableKind::Roster;
    let name_idx = require(table, kind, &col.employee_name)?;
    let role_idx = require(table, kind, &col.role)?;
    let date_idx = require(table, kind, &col.join_date)?;
    let used = [name_idx, role_idx, date_idx];

    let rows = table
        .rows()
        .iter()
        .map(|row| RosterRow {
            employee_name: row[name_idx].display().trim().to_string(),
            role: match &row[role_idx] {
                Cell::Empty => None,
                other => Some(other.display()),
            },
            join_date: cell_date(&row[date_idx]),
            raw_fields: raw_fields(table, row, &used),
        })
        .collect();

    Ok(rows)
}
