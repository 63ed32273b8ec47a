//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Scripts that wrap `hireboard` rely on them.
//!
//! | Code | Meaning                                                      |
//! |------|--------------------------------------------------------------|
//! | 0    | Success, including "no matches" and per-file read warnings   |
//! | 1    | General error (unspecified)                                  |
//! | 2    | Usage or configuration error                                 |
//! | 3    | A required column is missing from the reports or the roster |
//! | 4    | Output could not be written                                  |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into a `CliError` constructor

/// Success - command completed. Unreadable input files are warnings, not errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, unreadable or invalid config file.
pub const EXIT_USAGE: u8 = 2;

/// The join could not run: a required column is absent.
pub const EXIT_MISSING_COLUMN: u8 = 3;

/// Dashboard or export output could not be written.
pub const EXIT_OUTPUT: u8 = 4;
