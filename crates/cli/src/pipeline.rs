//! Load, join, render.
//!
//! Each stage is a plain function so tests (and `hireboard passed`) can stop
//! before the presenter.

use hireboard_config::{DashboardConfig, DisplaySettings};
use hireboard_core::normalize::format_dates;
use hireboard_core::Table;
use hireboard_io::{load_reports, load_roster, FileReadError, FileReadWarning, ReportLoad, RosterLoad};
use hireboard_merge::{passed_table, DuplicateKey, MatchSummary, MergeError, PassedCandidate};
use tracing::info;

use crate::present::Presenter;

/// Raw inputs as read from disk.
#[derive(Debug, Default)]
pub struct Inputs {
    pub reports: ReportLoad,
    pub roster: RosterLoad,
}

impl Inputs {
    /// Every file that failed to load, reports first.
    pub fn failures(&self) -> impl Iterator<Item = &FileReadError> {
        self.reports.failures.iter().chain(self.roster.failure.as_ref())
    }

    /// Every file that loaded only in part, reports first.
    pub fn warnings(&self) -> impl Iterator<Item = &FileReadWarning> {
        self.reports.warnings.iter().chain(self.roster.warning.as_ref())
    }
}

pub fn load_inputs(config: &DashboardConfig) -> Inputs {
    let reports = load_reports(
        &config.inputs.reports_dir,
        &config.report_pattern(),
        &config.columns.team_member,
    );
    let roster = load_roster(&config.inputs.roster_file);
    info!(
        report_files = reports.files_loaded.len(),
        report_rows = reports.table.len(),
        roster_rows = roster.table.len(),
        failures = reports.failures.len() + usize::from(roster.failure.is_some()),
        warnings = reports.warnings.len() + usize::from(roster.warning.is_some()),
        "inputs loaded"
    );
    Inputs { reports, roster }
}

/// Everything the dashboard shows, ready for any presenter.
#[derive(Debug)]
pub struct Dashboard {
    pub failures: Vec<FileReadError>,
    pub warnings: Vec<FileReadWarning>,
    pub duplicates: Vec<DuplicateKey>,
    pub summary: MatchSummary,
    /// Raw tables with dates formatted for display.
    pub reports: Table,
    pub roster: Table,
    pub passed: Vec<PassedCandidate>,
    pub passed_table: Table,
}

pub fn build_dashboard(config: &DashboardConfig, inputs: Inputs) -> Result<Dashboard, MergeError> {
    let result = hireboard_merge::run(&inputs.reports.table, &inputs.roster.table, &config.merge_config())?;
    info!(
        passed = result.summary.passed,
        matched = result.summary.matched,
        unmatched = result.summary.unmatched,
        "join complete"
    );

    let passed_table = format_dates(&passed_table(&result.candidates, &config.columns));
    let reports = format_dates(&inputs.reports.table);
    let roster = format_dates(&inputs.roster.table);

    let mut failures = inputs.reports.failures;
    failures.extend(inputs.roster.failure);
    let mut warnings = inputs.reports.warnings;
    warnings.extend(inputs.roster.warning);

    Ok(Dashboard {
        failures,
        warnings,
        duplicates: result.roster_duplicates,
        summary: result.summary,
        reports,
        roster,
        passed: result.candidates,
        passed_table,
    })
}

/// Draw the dashboard: title, one error per unreadable file, warnings for
/// partly read files and duplicate names, the two raw sections, then the
/// passed list or its empty state.
pub fn render(dashboard: &Dashboard, display: &DisplaySettings, presenter: &mut dyn Presenter) {
    presenter.render_title(&display.title);

    for failure in &dashboard.failures {
        presenter.render_error(&failure.to_string());
    }
    for warning in &dashboard.warnings {
        presenter.render_warning(&warning.to_string());
    }
    for dup in &dashboard.duplicates {
        presenter.render_warning(&duplicate_message(dup));
    }

    presenter.render_section(&display.reports_heading, &dashboard.reports, true);
    presenter.render_section(&display.roster_heading, &dashboard.roster, true);

    presenter.render_heading(&display.passed_heading);
    if dashboard.passed.is_empty() {
        presenter.render_empty_state(&display.empty_message);
    } else {
        presenter.render_table(&dashboard.passed_table);
    }
}

pub fn duplicate_message(dup: &DuplicateKey) -> String {
    format!(
        "'{}' appears {} times in the roster; the last row is used",
        dup.employee_name, dup.occurrences
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_core::Cell;

    /// Records calls so render order can be checked.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Presenter for Recorder {
        fn render_title(&mut self, title: &str) {
            self.0.push(format!("title:{title}"));
        }
        fn render_error(&mut self, message: &str) {
            self.0.push(format!("error:{message}"));
        }
        fn render_warning(&mut self, message: &str) {
            self.0.push(format!("warning:{message}"));
        }
        fn render_heading(&mut self, heading: &str) {
            self.0.push(format!("heading:{heading}"));
        }
        fn render_section(&mut self, heading: &str, table: &Table, collapsed: bool) {
            self.0.push(format!("section:{heading}:{}:{collapsed}", table.len()));
        }
        fn render_table(&mut self, table: &Table) {
            self.0.push(format!("table:{}", table.len()));
        }
        fn render_empty_state(&mut self, message: &str) {
            self.0.push(format!("empty:{message}"));
        }
    }

    fn inputs(reports: Table, roster: Table) -> Inputs {
        Inputs {
            reports: ReportLoad {
                table: reports,
                ..Default::default()
            },
            roster: RosterLoad {
                table: roster,
                ..Default::default()
            },
        }
    }

    fn report_table(rows: &[[&str; 4]]) -> Table {
        Table::from_rows(
            ["Interview", "Status", "Candidate Name", "Team Member"],
            rows.iter().map(|r| r.iter().map(|s| Cell::text(*s)).collect()).collect(),
        )
    }

    fn roster_table(rows: &[[&str; 3]]) -> Table {
        Table::from_rows(
            ["Employee Name", "Role", "Join Date"],
            rows.iter().map(|r| r.iter().map(|s| Cell::text(*s)).collect()).collect(),
        )
    }

    #[test]
    fn dashboard_formats_dates_everywhere() {
        let config = DashboardConfig::default();
        let dash = build_dashboard(
            &config,
            inputs(
                report_table(&[["yes", "pass", "Alice Smith", "John Doe"]]),
                roster_table(&[["Alice Smith", "Engineer", "2024-01-15"]]),
            ),
        )
        .unwrap();

        assert_eq!(dash.roster.cell(0, 2), &Cell::text("15-Jan-2024"));
        assert_eq!(dash.passed_table.cell(0, 1), &Cell::text("15-Jan-2024"));
        assert_eq!(dash.summary.matched, 1);
    }

    #[test]
    fn render_order_with_matches() {
        let config = DashboardConfig::default();
        let mut inputs = inputs(
            report_table(&[["yes", "pass", "Alice Smith", "John Doe"]]),
            roster_table(&[["Alice Smith", "Engineer", ""], ["alice smith", "Lead", ""]]),
        );
        inputs
            .reports
            .failures
            .push(FileReadError::new("/r/Daily report_x.xlsx", "not a zip"));
        inputs.roster.warning = Some(FileReadWarning::new("/r/New Employee.xlsx", "sheet truncated"));
        let dash = build_dashboard(&config, inputs).unwrap();

        let mut rec = Recorder::default();
        render(&dash, &config.display, &mut rec);

        assert_eq!(
            rec.0,
            [
                "title:Dashboard",
                "error:cannot read Daily report_x.xlsx: not a zip",
                "warning:New Employee.xlsx: sheet truncated",
                "warning:'Alice Smith' appears 2 times in the roster; the last row is used",
                "section:Daily Reports:1:true",
                "section:New Employees:2:true",
                "heading:Employees Who Passed the Interview",
                "table:1",
            ]
        );
        assert_eq!(dash.passed[0].role.as_deref(), Some("Lead"));
    }

    #[test]
    fn nothing_loaded_renders_empty_state() {
        let config = DashboardConfig::default();
        let dash = build_dashboard(&config, Inputs::default()).unwrap();

        let mut rec = Recorder::default();
        render(&dash, &config.display, &mut rec);

        assert_eq!(
            rec.0.last().map(String::as_str),
            Some("empty:No employees who passed the interview were found.")
        );
    }

    #[test]
    fn missing_roster_column_is_fatal() {
        let config = DashboardConfig::default();
        let roster = Table::from_rows(["Employee Name", "Role"], vec![]);
        let err = build_dashboard(
            &config,
            inputs(report_table(&[["yes", "pass", "A", "B C"]]), roster),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "new employee roster: missing column 'Join Date'");
    }
}
