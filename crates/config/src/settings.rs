// Dashboard settings
// Loaded from --config, ./hireboard.toml, or ~/.config/hireboard/config.toml

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use hireboard_io::ReportPattern;
use hireboard_merge::{ColumnMapping, MergeConfig, PassRule};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "hireboard.toml";

/// Where the daily reports and roster live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Directory holding one report file per team.
    pub reports_dir: PathBuf,
    /// Report files must start with this...
    pub report_prefix: String,
    /// ...and end with this.
    pub report_extension: String,
    /// The new-employee roster spreadsheet.
    pub roster_file: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        let pattern = ReportPattern::default();
        Self {
            reports_dir: PathBuf::from("daily_reports"),
            report_prefix: pattern.prefix,
            report_extension: pattern.extension,
            roster_file: PathBuf::from("new_employee/New Employee.xlsx"),
        }
    }
}

/// Text shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub title: String,
    pub reports_heading: String,
    pub roster_heading: String,
    pub passed_heading: String,
    /// Shown instead of the passed table when nobody matched.
    pub empty_message: String,
    /// Default output path for `hireboard render`.
    pub html_output: PathBuf,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: "Dashboard".into(),
            reports_heading: "Daily Reports".into(),
            roster_heading: "New Employees".into(),
            passed_heading: "Employees Who Passed the Interview".into(),
            empty_message: "No employees who passed the interview were found.".into(),
            html_output: PathBuf::from("dashboard.html"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub inputs: InputSettings,
    pub columns: ColumnMapping,
    pub pass: PassRule,
    pub display: DisplaySettings,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Read { path: PathBuf, message: String },
    /// TOML parse / deserialization error.
    Parse(String),
    /// Config file could not be written.
    Write { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "cannot read {}: {message}", path.display()),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Write { path, message } => write!(f, "cannot write {}: {message}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {}

impl DashboardConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// User-level config path (`<config_dir>/hireboard/config.toml`).
    pub fn user_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hireboard")
            .join("config.toml")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Otherwise `./hireboard.toml`,
    /// then the user config file, are tried; with neither present the
    /// built-in defaults apply. Relative input paths in a file are resolved
    /// against that file's directory.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path).map(|c| (c, ConfigSource::File(path.to_path_buf())));
        }

        for path in [PathBuf::from(LOCAL_CONFIG_FILE), Self::user_config_path()] {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "using config file");
                let config = Self::load_file(&path)?;
                return Ok((config, ConfigSource::File(path)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml(&contents)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        if self.inputs.reports_dir.is_relative() {
            self.inputs.reports_dir = base.join(&self.inputs.reports_dir);
        }
        if self.inputs.roster_file.is_relative() {
            self.inputs.roster_file = base.join(&self.inputs.roster_file);
        }
    }

    /// Write the default configuration to `path`, creating parent directories.
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        let write_err = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };

        if path.exists() {
            return Err(write_err("file already exists".into()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
            }
        }
        let body = Self::default().to_toml()?;
        fs::write(path, body).map_err(|e| write_err(e.to_string()))
    }

    pub fn report_pattern(&self) -> ReportPattern {
        ReportPattern {
            prefix: self.inputs.report_prefix.clone(),
            extension: self.inputs.report_extension.clone(),
        }
    }

    pub fn merge_config(&self) -> MergeConfig {
        MergeConfig {
            columns: self.columns.clone(),
            pass_rule: self.pass.clone(),
        }
    }
}
