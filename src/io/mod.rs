//! File I/O for tabular data.
//!
//! Currently only CSV is supported, see [`csv`].

pub mod csv;

pub use self::csv::{read_table_from_path, read_table_from_reader, write_table_to_path, write_table_to_writer};
