// src/table.rs
//! In-memory raw table: rows of optional text cells, exactly as the source
//! sheet presented them. `None` is an empty cell; blank text stays `Some("")`
//! so the parser, not the loader, decides what counts as blank.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self { Self { rows } }

    /// Build from plain strings; empty strings become `None`.
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|c| {
                        let s: String = c.into();
                        if s.is_empty() { None } else { Some(s) }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Widest row. Ragged rows are normal in exported sheets.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Borrow a cell's text, treating out-of-range as empty.
pub fn cell(row: &[Option<String>], col: usize) -> Option<&str> {
    row.get(col).and_then(|c| c.as_deref())
}
