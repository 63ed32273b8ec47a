use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Column names the joiner reads. Matched exactly against trimmed headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub interview: String,
    pub status: String,
    pub candidate_name: String,
    /// Added by the loader to every daily report row.
    pub team_member: String,
    pub employee_name: String,
    pub role: String,
    pub join_date: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            interview: "Interview".into(),
            status: "Status".into(),
            candidate_name: "Candidate Name".into(),
            team_member: "Team Member".into(),
            employee_name: "Employee Name".into(),
            role: "Role".into(),
            join_date: "Join Date".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pass rule
// ---------------------------------------------------------------------------

/// Values a report row needs to count as a passed interview. Compared after
/// trimming and lowercasing both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassRule {
    pub interview: String,
    pub status: String,
}

impl Default for PassRule {
    fn default() -> Self {
        Self {
            interview: "yes".into(),
            status: "pass".into(),
        }
    }
}

impl PassRule {
    pub fn interview_matches(&self, value: &str) -> bool {
        normalize_token(value) == normalize_token(&self.interview)
    }

    pub fn status_matches(&self, value: &str) -> bool {
        normalize_token(value) == normalize_token(&self.status)
    }
}

/// Trim + lowercase, the comparison form shared by names and outcomes.
pub fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Everything the join needs besides the two tables. Built from the
/// `[columns]` and `[pass]` sections of the dashboard config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeConfig {
    pub columns: ColumnMapping,
    pub pass_rule: PassRule,
}
