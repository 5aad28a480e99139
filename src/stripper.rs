//! Column stripper: write a copy of each contract export without its balance column.
//!
//! For every file matching [`StripOptions::patterns`] under [`StripOptions::root`]:
//!
//! - an empty file is skipped ([`SkipReason::Empty`])
//! - a file whose header lacks [`StripOptions::column`] is skipped ([`SkipReason::MissingColumn`])
//! - otherwise the column is removed from every row and the result is written next to the input,
//!   named by [`derived_path`] with [`StripOptions::suffix`]
//!
//! The input file is never modified. Per-file errors are captured and the run continues.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::discovery::{find_files, CONTRACT_EXPORT_PATTERNS};
use crate::error::ToolResult;
use crate::io::{read_table_from_path, write_table_to_path};
use crate::naming::{derived_path, NO_BALANCE_SUFFIX};
use crate::run::{run_files, FileOutcome, Job, RunContext, RunObserver, RunSummary, SkipReason, WriteStats};
use crate::transform::strip_index;

/// Name of the balance column removed by default.
pub const BALANCE_COLUMN: &str = "Saldo";

/// Options controlling the column stripper.
///
/// [`Default`] gives the fixed production setup: the two contract export patterns under the
/// current directory, column `Saldo`, suffix `_no_balance`, no observer.
#[derive(Clone)]
pub struct StripOptions {
    /// Directory searched for input files.
    pub root: PathBuf,
    /// Glob patterns relative to `root`.
    pub patterns: Vec<String>,
    /// Column to remove.
    pub column: String,
    /// Suffix inserted before the extension of the output file.
    pub suffix: String,
    /// Optional observer for progress/logging.
    pub observer: Option<Arc<dyn RunObserver>>,
}

impl fmt::Debug for StripOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripOptions")
            .field("root", &self.root)
            .field("patterns", &self.patterns)
            .field("column", &self.column)
            .field("suffix", &self.suffix)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: CONTRACT_EXPORT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            column: BALANCE_COLUMN.to_string(),
            suffix: NO_BALANCE_SUFFIX.to_string(),
            observer: None,
        }
    }
}

/// Discover input files and strip the configured column from each.
///
/// # Errors
///
/// Only if a discovery pattern is invalid. Per-file problems are reported in the summary.
pub fn run_column_stripper(opts: &StripOptions) -> ToolResult<RunSummary> {
    let files = find_files(&opts.root, opts.patterns.as_slice())?;
    Ok(strip_files(&files, opts))
}

/// Strip the configured column from an explicit list of files (discovery is skipped).
pub fn strip_files(files: &[PathBuf], opts: &StripOptions) -> RunSummary {
    let ctx = RunContext {
        job: Job::StripColumn,
        root: opts.root.clone(),
    };
    run_files(&ctx, files, opts.observer.as_deref(), |path| {
        strip_file(path, &opts.column, &opts.suffix)
    })
}

/// Process one file: read it, drop `column`, write the `suffix` sibling.
pub fn strip_file(path: &Path, column: &str, suffix: &str) -> FileOutcome {
    try_strip_file(path, column, suffix).unwrap_or_else(FileOutcome::Failed)
}

fn try_strip_file(path: &Path, column: &str, suffix: &str) -> ToolResult<FileOutcome> {
    let table = read_table_from_path(path)?;
    if table.is_empty() {
        return Ok(FileOutcome::Skipped(SkipReason::Empty));
    }

    let Some(idx) = table.index_of(column) else {
        return Ok(FileOutcome::Skipped(SkipReason::MissingColumn {
            column: column.to_owned(),
            available: table.header().map(<[String]>::to_vec).unwrap_or_default(),
        }));
    };

    let stripped = strip_index(&table, idx);
    let output = derived_path(path, suffix);
    write_table_to_path(&output, &stripped)?;

    Ok(FileOutcome::Written(WriteStats {
        output,
        column: column.to_owned(),
        columns_before: table.column_count(),
        columns_after: stripped.column_count(),
        data_rows: table.data_row_count(),
    }))
}
