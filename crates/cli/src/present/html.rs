// Self-contained HTML dashboard
//
// One page, inline CSS, no scripts. Raw data sections use <details> so they
// start collapsed.

use hireboard_core::Table;

use super::{numbered_rows, Presenter};

const STYLE: &str = "\
body{font-family:system-ui,-apple-system,'Segoe UI',sans-serif;margin:2rem auto;max-width:72rem;padding:0 1rem;color:#1f2328}\
h1{font-size:1.8rem}h2{font-size:1.3rem;margin-top:2rem}\
details{border:1px solid #d0d7de;border-radius:6px;padding:.5rem 1rem;margin:.75rem 0}\
summary{cursor:pointer;font-weight:600}\
table{border-collapse:collapse;width:100%;margin:.5rem 0;font-size:.9rem}\
th,td{border:1px solid #d0d7de;padding:.3rem .6rem;text-align:left}\
th{background:#f6f8fa}td.n,th.n{color:#656d76;text-align:right;width:1%}\
.alert{border-radius:6px;padding:.6rem 1rem;margin:.5rem 0}\
.error{background:#ffebe9;border:1px solid #ff8182}\
.warning{background:#fff8c5;border:1px solid #d4a72c}\
.empty{color:#656d76;font-style:italic}";

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    title: String,
    body: String,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap everything rendered so far into a complete document.
    pub fn finish(self) -> String {
        format!(
            "<!doctype html>\n<html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head>\n<body>\n{}</body></html>\n",
            escape(&self.title),
            STYLE,
            self.body
        )
    }

    fn table_html(&mut self, table: &Table) {
        if table.has_no_columns() {
            self.body.push_str("<p class=\"empty\">No data.</p>\n");
            return;
        }

        self.body.push_str("<table>\n<thead><tr><th class=\"n\"></th>");
        for header in table.headers() {
            self.body.push_str(&format!("<th>{}</th>", escape(header)));
        }
        self.body.push_str("</tr></thead>\n<tbody>\n");
        for (n, row) in numbered_rows(table) {
            self.body.push_str(&format!("<tr><td class=\"n\">{n}</td>"));
            for value in row {
                self.body.push_str(&format!("<td>{}</td>", escape(&value)));
            }
            self.body.push_str("</tr>\n");
        }
        self.body.push_str("</tbody>\n</table>\n");
    }
}

impl Presenter for HtmlPresenter {
    fn render_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.body.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    }

    fn render_error(&mut self, message: &str) {
        self.body
            .push_str(&format!("<div class=\"alert error\">{}</div>\n", escape(message)));
    }

    fn render_warning(&mut self, message: &str) {
        self.body
            .push_str(&format!("<div class=\"alert warning\">{}</div>\n", escape(message)));
    }

    fn render_heading(&mut self, heading: &str) {
        self.body.push_str(&format!("<h2>{}</h2>\n", escape(heading)));
    }

    fn render_section(&mut self, heading: &str, table: &Table, collapsed: bool) {
        let open = if collapsed { "" } else { " open" };
        self.body.push_str(&format!(
            "<details{open}>\n<summary>{} ({} rows)</summary>\n",
            escape(heading),
            table.len()
        ));
        self.table_html(table);
        self.body.push_str("</details>\n");
    }

    fn render_table(&mut self, table: &Table) {
        self.table_html(table);
    }

    fn render_empty_state(&mut self, message: &str) {
        self.render_warning(message);
    }
}

/// Escape text for HTML element and attribute content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
