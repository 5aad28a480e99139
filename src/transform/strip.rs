//! Column removal.

use crate::error::{ToolError, ToolResult};
use crate::types::Table;

/// Returns a new [`Table`] without the column named `column`.
///
/// The column is located in the header; the field at that index is then removed from the header
/// and from every data row. Rows too short to have that field are copied unchanged.
///
/// # Errors
///
/// [`ToolError::MissingColumn`] if the header does not contain `column` (or the table is empty).
pub fn strip_column(table: &Table, column: &str) -> ToolResult<Table> {
    let idx = table.index_of(column).ok_or_else(|| ToolError::MissingColumn {
        column: column.to_owned(),
        available: table.header().map(<[String]>::to_vec).unwrap_or_default(),
    })?;
    Ok(strip_index(table, idx))
}

/// Returns a new [`Table`] with the field at `idx` removed from every row that has it.
pub fn strip_index(table: &Table, idx: usize) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, field)| field.clone())
                .collect()
        })
        .collect();
    Table::new(rows)
}
