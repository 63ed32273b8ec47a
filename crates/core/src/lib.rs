//! `hireboard-core`: shared table model and normalization.
//!
//! Every stage of the pipeline passes `Table`s around; the loader produces
//! them, the joiner reads them, the presenters render them.

pub mod cell;
pub mod dates;
pub mod normalize;
pub mod table;

pub use cell::Cell;
pub use dates::{format_display_date, parse_loose_date, DISPLAY_DATE_FORMAT};
pub use table::Table;
