// Plain-text dashboard for terminals (`hireboard show`)

use hireboard_core::Table;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{numbered_rows, Presenter};

/// Widest a single column may get before its values are clipped.
const MAX_COLUMN_WIDTH: usize = 40;

#[derive(Debug, Default)]
pub struct TextPresenter {
    out: String,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn grid(&mut self, table: &Table) {
        if table.has_no_columns() {
            self.line("  (no data)");
            return;
        }

        let rows: Vec<(usize, Vec<String>)> = numbered_rows(table).collect();
        let num_width = rows.len().to_string().len();

        let mut widths: Vec<usize> = table.headers().iter().map(|h| h.width()).collect();
        for (_, row) in &rows {
            for (w, value) in widths.iter_mut().zip(row) {
                *w = (*w).max(value.width());
            }
        }
        for w in &mut widths {
            *w = (*w).min(MAX_COLUMN_WIDTH);
        }

        let header: Vec<String> = table
            .headers()
            .iter()
            .zip(&widths)
            .map(|(h, &w)| fit(h, w))
            .collect();
        self.line(format!("{:>num_width$}  {}", "", header.join("  ")).trim_end());

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        self.line(&format!("{:>num_width$}  {}", "", rule.join("  ")));

        for (n, row) in rows {
            let cells: Vec<String> = row.iter().zip(&widths).map(|(v, &w)| fit(v, w)).collect();
            self.line(format!("{n:>num_width$}  {}", cells.join("  ")).trim_end());
        }
    }
}

impl Presenter for TextPresenter {
    fn render_title(&mut self, title: &str) {
        self.line(title);
        self.line(&"=".repeat(title.width()));
        self.out.push('\n');
    }

    fn render_error(&mut self, message: &str) {
        self.line(&format!("[error] {message}"));
    }

    fn render_warning(&mut self, message: &str) {
        self.line(&format!("[warning] {message}"));
    }

    fn render_heading(&mut self, heading: &str) {
        self.out.push('\n');
        self.line(heading);
        self.line(&"-".repeat(heading.width()));
    }

    fn render_section(&mut self, heading: &str, table: &Table, _collapsed: bool) {
        self.render_heading(&format!("{heading} ({} rows)", table.len()));
        self.grid(table);
    }

    fn render_table(&mut self, table: &Table) {
        self.grid(table);
    }

    fn render_empty_state(&mut self, message: &str) {
        self.line(message);
    }
}

/// Pad `s` to exactly `width` display columns, clipping with ".." when it
/// doesn't fit. Wide characters (CJK, emoji) count as two columns.
fn fit(s: &str, width: usize) -> String {
    let sw = s.width();
    if sw <= width {
        return format!("{s}{}", " ".repeat(width - sw));
    }

    let budget = width.saturating_sub(2);
    let mut clipped = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        clipped.push(ch);
    }
    let dots = if width >= 2 { ".." } else { "" };
    format!("{clipped}{dots}{}", " ".repeat(width - used - dots.len()))
}
