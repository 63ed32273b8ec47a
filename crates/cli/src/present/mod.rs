//! Dashboard presenters.
//!
//! A presenter only knows how to draw; it never loads or joins anything.
//! [`crate::pipeline::render`] decides what goes on the page.

pub mod html;
pub mod text;

use hireboard_core::Table;

pub use html::HtmlPresenter;
pub use text::TextPresenter;

pub trait Presenter {
    /// Page title, drawn once at the top.
    fn render_title(&mut self, title: &str);

    /// A load failure the reader should notice (one per unreadable file).
    fn render_error(&mut self, message: &str);

    /// A data-quality note that doesn't stop anything.
    fn render_warning(&mut self, message: &str);

    fn render_heading(&mut self, heading: &str);

    /// Raw input data under its own heading. `collapsed` is a hint; outputs
    /// that can't fold sections ignore it.
    fn render_section(&mut self, heading: &str, table: &Table, collapsed: bool);

    /// A table with 1-based row numbers.
    fn render_table(&mut self, table: &Table);

    /// Stand-in for a table with no rows to show.
    fn render_empty_state(&mut self, message: &str);
}

/// Display rows of a table, each prefixed with its 1-based row number.
pub fn numbered_rows(table: &Table) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| (i + 1, row.iter().map(|c| c.display()).collect()))
}
