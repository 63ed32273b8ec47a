// Daily report directory and roster file loading
//
// Failures are collected at this boundary and handed back to the caller;
// nothing here returns an error for a bad file.

use std::path::{Path, PathBuf};

use hireboard_core::{Cell, Table};
use tracing::{debug, warn};

use crate::error::{FileReadError, FileReadWarning};
use crate::xlsx::{import_first_sheet, SheetImport};

/// Which directory entries count as daily reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPattern {
    pub prefix: String,
    pub extension: String,
}

impl Default for ReportPattern {
    fn default() -> Self {
        Self {
            prefix: "Daily report".to_string(),
            extension: ".xlsx".to_string(),
        }
    }
}

impl ReportPattern {
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix) && file_name.ends_with(&self.extension)
    }
}

/// Derive the team member from a report file name: the extension is dropped,
/// the stem split on `_`, and the last two tokens joined with a space.
///
/// `Daily report_TeamA_John_Doe.xlsx` → `John Doe`. Returns `None` when the
/// stem has fewer than two tokens.
pub fn team_member_from_file_name(file_name: &str, extension: &str) -> Option<String> {
    let stem = file_name.strip_suffix(extension).unwrap_or(file_name);
    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [.., first, last] => Some(format!("{first} {last}")),
        _ => None,
    }
}

/// Result of loading every daily report in a directory.
#[derive(Debug, Default)]
pub struct ReportLoad {
    /// All report rows, concatenated in file-name order.
    pub table: Table,
    /// Files that matched the pattern but could not be read.
    pub failures: Vec<FileReadError>,
    /// Files that loaded only in part.
    pub warnings: Vec<FileReadWarning>,
    /// Files that were read successfully, in load order.
    pub files_loaded: Vec<PathBuf>,
}

/// Load every file in `dir` matching `pattern`, tagging each row with the
/// team member derived from its file name under `team_member_column`.
///
/// Files are visited in sorted file-name order so repeated runs over the same
/// directory produce identical output.
pub fn load_reports(dir: &Path, pattern: &ReportPattern, team_member_column: &str) -> ReportLoad {
    let mut load = ReportLoad::default();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read report directory");
            load.failures.push(FileReadError::new(dir, e.to_string()));
            return load;
        }
    };

    let mut candidates: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            pattern.matches(&name).then(|| (name, entry.path()))
        })
        .collect();
    candidates.sort();

    let mut tables = Vec::with_capacity(candidates.len());
    for (name, path) in candidates {
        match load_report_file(&path, &name, pattern, team_member_column) {
            Ok((table, warning)) => {
                debug!(file = %name, rows = table.len(), "loaded daily report");
                load.warnings.extend(warning);
                tables.push(table);
                load.files_loaded.push(path);
            }
            Err(err) => {
                warn!(file = %name, error = %err.message, "skipping daily report");
                load.failures.push(err);
            }
        }
    }

    load.table = Table::concat(tables);
    load
}

fn load_report_file(
    path: &Path,
    name: &str,
    pattern: &ReportPattern,
    team_member_column: &str,
) -> Result<(Table, Option<FileReadWarning>), FileReadError> {
    let team_member = team_member_from_file_name(name, &pattern.extension).ok_or_else(|| {
        FileReadError::new(path, "file name has no <first>_<last> team member suffix")
    })?;

    if !path.is_file() {
        return Err(FileReadError::new(path, "not a regular file"));
    }

    let import = import_first_sheet(path).map_err(|e| FileReadError::new(path, e))?;
    let warning = truncation_warning(path, &import);
    let mut table = import.table;
    table.fill_column(team_member_column, Cell::Text(team_member));
    Ok((table, warning))
}

fn truncation_warning(path: &Path, import: &SheetImport) -> Option<FileReadWarning> {
    let message = import.truncation_warning()?;
    warn!(
        file = %path.display(),
        rows = import.truncated_rows,
        cols = import.truncated_cols,
        "sheet truncated"
    );
    Some(FileReadWarning::new(path, message))
}

/// Result of loading the new-employee roster.
#[derive(Debug, Default)]
pub struct RosterLoad {
    /// Roster rows; empty when the file could not be read.
    pub table: Table,
    pub failure: Option<FileReadError>,
    /// Set when the roster loaded only in part.
    pub warning: Option<FileReadWarning>,
}

pub fn load_roster(path: &Path) -> RosterLoad {
    match import_first_sheet(path) {
        Ok(import) => {
            debug!(file = %path.display(), rows = import.table.len(), "loaded roster");
            let warning = truncation_warning(path, &import);
            RosterLoad {
                table: import.table,
                failure: None,
                warning,
            }
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "cannot read roster");
            RosterLoad {
                table: Table::default(),
                failure: Some(FileReadError::new(path, e)),
                warning: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_report(dir: &Path, name: &str, rows: &[[&str; 3]]) {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        for (col, header) in ["Interview", " Status ", "Candidate Name"].iter().enumerate() {
            ws.write_string(0, col as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                ws.write_string(r as u32 + 1, c as u16, *value).unwrap();
            }
        }
        wb.save(dir.join(name)).unwrap();
    }

    #[test]
    fn pattern_needs_prefix_and_extension() {
        let p = ReportPattern::default();
        assert!(p.matches("Daily report_TeamA_John_Doe.xlsx"));
        assert!(!p.matches("daily report_TeamA_John_Doe.xlsx"));
        assert!(!p.matches("Daily report_TeamA_John_Doe.csv"));
        assert!(!p.matches("New Employee_202401.xlsx"));
    }

    #[test]
    fn team_member_is_last_two_tokens() {
        assert_eq!(
            team_member_from_file_name("Daily report_TeamA_John_Doe.xlsx", ".xlsx").as_deref(),
            Some("John Doe")
        );
        assert_eq!(
            team_member_from_file_name("Daily report_Jane.xlsx", ".xlsx").as_deref(),
            Some("Daily report Jane")
        );
        assert_eq!(team_member_from_file_name("Daily report.xlsx", ".xlsx"), None);
    }

    #[test]
    fn loads_matching_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_report(dir.path(), "Daily report_TeamB_Zed_Zulu.xlsx", &[["yes", "pass", "Zoe"]]);
        write_report(dir.path(), "Daily report_TeamA_John_Doe.xlsx", &[["yes", "Pass", "Alice"], ["no", "fail", "Bob"]]);
        write_report(dir.path(), "Weekly summary.xlsx", &[["yes", "pass", "Ignored"]]);

        let load = load_reports(dir.path(), &ReportPattern::default(), "Team Member");

        assert!(load.failures.is_empty(), "{:?}", load.failures);
        assert!(load.warnings.is_empty());
        assert_eq!(load.files_loaded.len(), 2);
        assert_eq!(
            load.table.headers(),
            ["Interview", "Status", "Candidate Name", "Team Member"]
        );
        assert_eq!(load.table.len(), 3);
        assert_eq!(load.table.cell(0, 2), &Cell::text("Alice"));
        assert_eq!(load.table.cell(0, 3), &Cell::text("John Doe"));
        assert_eq!(load.table.cell(1, 3), &Cell::text("John Doe"));
        assert_eq!(load.table.cell(2, 3), &Cell::text("Zed Zulu"));
    }

    #[test]
    fn broken_file_is_reported_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        write_report(dir.path(), "Daily report_TeamA_John_Doe.xlsx", &[["yes", "pass", "Alice"]]);
        std::fs::write(dir.path().join("Daily report_TeamC_Bad_File.xlsx"), b"garbage").unwrap();

        let load = load_reports(dir.path(), &ReportPattern::default(), "Team Member");

        assert_eq!(load.table.len(), 1);
        assert_eq!(load.failures.len(), 1);
        assert_eq!(load.failures[0].file_name(), "Daily report_TeamC_Bad_File.xlsx");
    }

    #[test]
    fn name_without_team_member_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_report(dir.path(), "Daily report.xlsx", &[["yes", "pass", "Alice"]]);

        let load = load_reports(dir.path(), &ReportPattern::default(), "Team Member");
        assert!(load.table.has_no_columns());
        assert_eq!(load.failures.len(), 1);
    }

    #[test]
    fn empty_directory_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let load = load_reports(dir.path(), &ReportPattern::default(), "Team Member");
        assert!(load.table.is_empty());
        assert!(load.table.has_no_columns());
        assert!(load.failures.is_empty());
    }

    #[test]
    fn missing_directory_is_one_failure() {
        let dir = tempfile::tempdir().unwrap();
        let load = load_reports(&dir.path().join("nope"), &ReportPattern::default(), "Team Member");
        assert!(load.table.is_empty());
        assert_eq!(load.failures.len(), 1);
    }

    #[test]
    fn wide_sheets_load_with_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        for (c, header) in ["Interview", "Status", "Candidate Name"].iter().enumerate() {
            ws.write_string(0, c as u16, *header).unwrap();
        }
        for c in 3..260u16 {
            ws.write_string(0, c, format!("Note {c}")).unwrap();
        }
        for (c, value) in ["yes", "pass", "Alice"].iter().enumerate() {
            ws.write_string(1, c as u16, *value).unwrap();
        }
        let path = dir.path().join("Daily report_TeamA_John_Doe.xlsx");
        wb.save(&path).unwrap();

        let load = load_reports(dir.path(), &ReportPattern::default(), "Team Member");
        assert!(load.failures.is_empty());
        assert_eq!(load.table.len(), 1);
        assert_eq!(load.warnings.len(), 1);
        assert_eq!(load.warnings[0].file_name(), "Daily report_TeamA_John_Doe.xlsx");
        assert!(load.warnings[0].message.contains("4 columns were not read"));

        let roster = load_roster(&path);
        assert!(roster.failure.is_none());
        assert!(roster.warning.is_some());
    }

    #[test]
    fn missing_roster_is_empty_with_failure() {
        let dir = tempfile::tempdir().unwrap();
        let load = load_roster(&dir.path().join("New Employee_202401.xlsx"));
        assert!(load.table.is_empty());
        assert!(load.failure.is_some());
        assert!(load.warning.is_none());
    }
}
