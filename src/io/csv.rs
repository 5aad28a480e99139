//! CSV reading and writing for [`Table`].

use std::path::Path;

use crate::error::ToolResult;
use crate::types::Table;

/// Read a CSV file fully into a [`Table`].
///
/// Rules:
///
/// - The header is kept as row 0 (the reader does not treat it specially).
/// - Rows may have different lengths; nothing is validated against the header.
/// - Fields must be valid UTF-8.
pub fn read_table_from_path(path: impl AsRef<Path>) -> ToolResult<Table> {
    let mut rdr = reader_builder().from_path(path)?;
    read_table_from_reader(&mut rdr)
}

/// Read CSV data from an existing CSV reader.
///
/// The reader should be configured without headers, otherwise row 0 is lost.
pub fn read_table_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ToolResult<Table> {
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(Table::new(rows))
}

/// Write a [`Table`] to `path`, truncating any existing file.
pub fn write_table_to_path(path: impl AsRef<Path>, table: &Table) -> ToolResult<()> {
    let mut wtr = writer_builder().from_path(path)?;
    write_table_to_writer(&mut wtr, table)
}

/// Write all rows of a [`Table`] to an existing CSV writer and flush it.
pub fn write_table_to_writer<W: std::io::Write>(wtr: &mut csv::Writer<W>, table: &Table) -> ToolResult<()> {
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reader settings shared by every job: headerless, ragged rows allowed.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(false).flexible(true);
    b
}

/// Writer settings shared by every job: minimal quoting, ragged rows allowed.
pub fn writer_builder() -> csv::WriterBuilder {
    let mut b = csv::WriterBuilder::new();
    b.flexible(true);
    b
}
