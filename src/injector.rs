//! Identifier injector: add a random identifier column to each balance-free file, in place.
//!
//! For every file matching [`InjectOptions::pattern`] under [`InjectOptions::root`]:
//!
//! - an empty file is skipped ([`SkipReason::Empty`])
//! - otherwise [`InjectOptions::label`] becomes the first header field, every data row gets a
//!   fresh identifier as its first field, and the file is overwritten
//!
//! Running it twice on the same file adds a second identifier column with new values; the job is
//! not idempotent and does not check identifiers for collisions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

use crate::discovery::{find_files, NO_BALANCE_PATTERN};
use crate::error::ToolResult;
use crate::io::{read_table_from_path, write_table_to_path};
use crate::nanoid::DEFAULT_SIZE;
use crate::run::{run_files, FileOutcome, Job, RunContext, RunObserver, RunSummary, SkipReason, WriteStats};
use crate::transform::prepend_id_column;

/// Header label of the injected column.
pub const ID_LABEL: &str = "id";

/// Options controlling the identifier injector.
///
/// [`Default`] gives the fixed production setup: `**/*_no_balance.csv` under the current
/// directory, label `id`, 21-symbol identifiers, no observer.
#[derive(Clone)]
pub struct InjectOptions {
    /// Directory searched for input files.
    pub root: PathBuf,
    /// Glob pattern relative to `root`.
    pub pattern: String,
    /// Header label of the new first column.
    pub label: String,
    /// Identifier length.
    pub id_size: usize,
    /// Optional observer for progress/logging.
    pub observer: Option<Arc<dyn RunObserver>>,
}

impl fmt::Debug for InjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectOptions")
            .field("root", &self.root)
            .field("pattern", &self.pattern)
            .field("label", &self.label)
            .field("id_size", &self.id_size)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: NO_BALANCE_PATTERN.to_string(),
            label: ID_LABEL.to_string(),
            id_size: DEFAULT_SIZE,
            observer: None,
        }
    }
}

/// Discover input files and add an identifier column to each, drawing from `rng`.
///
/// # Errors
///
/// Only if the discovery pattern is invalid. Per-file problems are reported in the summary.
pub fn run_id_injector<R: Rng + ?Sized>(opts: &InjectOptions, rng: &mut R) -> ToolResult<RunSummary> {
    let files = find_files(&opts.root, &[opts.pattern.as_str()])?;
    Ok(inject_ids_into_paths(&files, opts, rng))
}

/// Add identifiers to an explicit list of files, e.g. [`RunSummary::written_paths`] of a
/// column-stripper run.
pub fn inject_ids_into_paths<R: Rng + ?Sized>(files: &[PathBuf], opts: &InjectOptions, rng: &mut R) -> RunSummary {
    let ctx = RunContext {
        job: Job::InjectIds,
        root: opts.root.clone(),
    };
    run_files(&ctx, files, opts.observer.as_deref(), |path| {
        inject_file(path, &opts.label, opts.id_size, &mut *rng)
    })
}

/// Process one file: read it, prepend the identifier column, overwrite it.
pub fn inject_file<R: Rng + ?Sized>(path: &Path, label: &str, id_size: usize, rng: &mut R) -> FileOutcome {
    try_inject_file(path, label, id_size, rng).unwrap_or_else(FileOutcome::Failed)
}

fn try_inject_file<R: Rng + ?Sized>(path: &Path, label: &str, id_size: usize, rng: &mut R) -> ToolResult<FileOutcome> {
    let table = read_table_from_path(path)?;
    if table.is_empty() {
        return Ok(FileOutcome::Skipped(SkipReason::Empty));
    }

    let with_ids = prepend_id_column(&table, label, id_size, rng);
    write_table_to_path(path, &with_ids)?;

    Ok(FileOutcome::Written(WriteStats {
        output: path.to_path_buf(),
        column: label.to_owned(),
        columns_before: table.column_count(),
        columns_after: with_ids.column_count(),
        data_rows: with_ids.data_row_count(),
    }))
}
