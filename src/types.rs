//! Core data model for the CSV jobs.
//!
//! A [`Table`] is the whole file held in memory: row 0 is the header, every following row is a
//! data row. Rows are not required to have the header's width; ragged rows are carried as-is.

/// A single row of string fields.
pub type Row = Vec<String>;

/// In-memory tabular file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// All rows in file order, header first.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows (header first).
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a table from a header and data rows.
    pub fn with_header(header: Row, data: Vec<Row>) -> Self {
        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(header);
        rows.extend(data);
        Self { rows }
    }

    /// `true` when the file had no rows at all (not even a header).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, if present.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows (everything after the header).
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of header columns (0 for an empty table).
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    /// Number of data rows.
    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }

    /// Returns the index of a header column by name, if present.
    ///
    /// When the name appears more than once, the first occurrence wins.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.header()?.iter().position(|h| h == name)
    }
}
