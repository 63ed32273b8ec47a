//! Passed-candidate list output for `hireboard passed`.
//!
//! - `table`: aligned text, same layout as `hireboard show`
//! - `json`: array of objects; join dates as ISO `yyyy-mm-dd`, missing values `null`
//! - `csv`: header row from the configured column names, dates as `dd-Mon-yyyy`

use std::io::Write;

use clap::ValueEnum;
use hireboard_core::normalize::format_dates;
use hireboard_merge::model::passed_headers;
use hireboard_merge::{passed_table, ColumnMapping, PassedCandidate};

use crate::present::{Presenter, TextPresenter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PassedFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Write `candidates` in `format`. `empty_message` is only used by the table
/// format; JSON and CSV print an empty array / header-only file.
pub fn write_passed(
    out: &mut dyn Write,
    candidates: &[PassedCandidate],
    columns: &ColumnMapping,
    format: PassedFormat,
    empty_message: &str,
) -> Result<(), String> {
    match format {
        PassedFormat::Table => {
            let mut presenter = TextPresenter::new();
            if candidates.is_empty() {
                presenter.render_empty_state(empty_message);
            } else {
                presenter.render_table(&format_dates(&passed_table(candidates, columns)));
            }
            out.write_all(presenter.finish().as_bytes()).map_err(|e| e.to_string())
        }
        PassedFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, candidates).map_err(|e| e.to_string())?;
            writeln!(out).map_err(|e| e.to_string())
        }
        PassedFormat::Csv => write_csv(out, candidates, columns),
    }
}

fn write_csv(out: &mut dyn Write, candidates: &[PassedCandidate], columns: &ColumnMapping) -> Result<(), String> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(passed_headers(columns)).map_err(|e| e.to_string())?;
    for candidate in candidates {
        wtr.write_record(candidate.display_fields()).map_err(|e| e.to_string())?;
    }
    wtr.flush().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candidates() -> Vec<PassedCandidate> {
        vec![
            PassedCandidate {
                employee_name: "Alice Smith".into(),
                join_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                role: Some("Engineer".into()),
                team_member: "John Doe".into(),
                matched: true,
            },
            PassedCandidate {
                employee_name: "Nobody, Known".into(),
                join_date: None,
                role: None,
                team_member: "Jane Roe".into(),
                matched: false,
            },
        ]
    }

    fn render(format: PassedFormat, candidates: &[PassedCandidate]) -> String {
        let mut buf = Vec::new();
        write_passed(&mut buf, candidates, &ColumnMapping::default(), format, "none").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_uses_display_dates_and_quotes() {
        let out = render(PassedFormat::Csv, &candidates());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Employee Name,Join Date,Role,Team Member");
        assert_eq!(lines[1], "Alice Smith,15-Jan-2024,Engineer,John Doe");
        assert_eq!(lines[2], "\"Nobody, Known\",,,Jane Roe");
    }

    #[test]
    fn json_keeps_iso_dates_and_nulls() {
        let out = render(PassedFormat::Json, &candidates());
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["Employee Name"], "Alice Smith");
        assert_eq!(v[0]["Join Date"], "2024-01-15");
        assert_eq!(v[1]["Role"], serde_json::Value::Null);
        assert_eq!(v[1]["Team Member"], "Jane Roe");
    }

    #[test]
    fn table_shows_empty_message() {
        assert_eq!(render(PassedFormat::Table, &[]), "none\n");
        let out = render(PassedFormat::Table, &candidates());
        assert!(out.contains("1  Alice Smith    15-Jan-2024"));
    }

    #[test]
    fn empty_json_is_an_array() {
        assert_eq!(render(PassedFormat::Json, &[]).trim(), "[]");
    }
}
