//! `hireboard-merge`: joins passed interviews against the new-hire roster.
//!
//! Pure engine crate: receives loaded tables, returns typed results.
//! No CLI or file I/O.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;

pub use config::{ColumnMapping, MergeConfig, PassRule};
pub use engine::{build_passed_candidates, run};
pub use error::{MergeError, TableKind};
pub use model::{passed_table, DuplicateKey, MatchSummary, MergeResult, PassedCandidate, ReportRow, RosterRow};
