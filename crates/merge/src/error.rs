use std::fmt;

/// Which input table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    DailyReports,
    Roster,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DailyReports => write!(f, "daily reports"),
            Self::Roster => write!(f, "new employee roster"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Missing required column in input data.
    MissingColumn { table: TableKind, column: String },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { table, column } => {
                write!(f, "{table}: missing column '{column}'")
            }
        }
    }
}

impl std::error::Error for MergeError {}
