use std::fmt;
use std::path::PathBuf;

/// A spreadsheet (or the report directory itself) that could not be read.
///
/// Collected by the loader and reported per file; never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadError {
    pub path: PathBuf,
    pub message: String,
}

impl FileReadError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for FileReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {}: {}", self.file_name(), self.message)
    }
}

impl std::error::Error for FileReadError {}

/// A spreadsheet that loaded, but not completely (for example a sheet cut
/// at the size cap). Shown next to read failures; the rows that were read
/// are still used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadWarning {
    pub path: PathBuf,
    pub message: String,
}

impl FileReadWarning {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for FileReadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name(), self.message)
    }
}
