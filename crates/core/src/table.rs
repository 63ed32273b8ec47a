use crate::cell::Cell;

/// An ordered, loosely-typed table: one header row plus data rows.
///
/// Rows are always exactly `headers.len()` cells wide; `push_row` pads or
/// truncates to keep that invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a table from string headers and pre-built rows.
    pub fn from_rows<H: Into<String>>(headers: impl IntoIterator<Item = H>, rows: Vec<Vec<Cell>>) -> Self {
        let mut table = Self::new(headers.into_iter().map(Into::into).collect());
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when nothing was ever loaded into the table (no columns at all).
    pub fn has_no_columns(&self) -> bool {
        self.headers.is_empty()
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |r| &r[col])
    }

    pub fn set_header(&mut self, col: usize, name: String) {
        if let Some(h) = self.headers.get_mut(col) {
            *h = name;
        }
    }

    /// Overwrite every cell of a column. `values` must yield one cell per row.
    pub fn replace_column(&mut self, col: usize, values: Vec<Cell>) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[col] = value;
        }
    }

    /// Set every row's value for `name` to `value`, adding the column at the
    /// end if it doesn't exist yet.
    pub fn fill_column(&mut self, name: &str, value: Cell) {
        let col = match self.column_index(name) {
            Some(col) => col,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Cell::Empty);
                }
                self.headers.len() - 1
            }
        };
        for row in &mut self.rows {
            row[col] = value.clone();
        }
    }

    /// Append `other` below `self`. Columns are unioned in first-seen order;
    /// cells for columns a table lacks are left empty.
    pub fn append(&mut self, other: Table) {
        let mapping: Vec<usize> = other
            .headers
            .iter()
            .map(|h| match self.column_index(h) {
                Some(idx) => idx,
                None => {
                    self.headers.push(h.clone());
                    for row in &mut self.rows {
                        row.push(Cell::Empty);
                    }
                    self.headers.len() - 1
                }
            })
            .collect();

        for other_row in other.rows {
            let mut row = vec![Cell::Empty; self.headers.len()];
            for (src, cell) in other_row.into_iter().enumerate() {
                if let Some(&dst) = mapping.get(src) {
                    row[dst] = cell;
                }
            }
            self.rows.push(row);
        }
    }

    /// Concatenate tables top to bottom (see [`Table::append`]).
    pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
        let mut out = Table::default();
        for t in tables {
            out.append(t);
        }
        out
    }
}
