// File I/O operations

pub mod error;
pub mod reports;
pub mod xlsx;

pub use error::{FileReadError, FileReadWarning};
pub use xlsx::SheetImport;
pub use reports::{load_reports, load_roster, team_member_from_file_name, ReportLoad, ReportPattern, RosterLoad};
