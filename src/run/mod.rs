//! Per-file outcomes, run summaries and the shared per-file driver.
//!
//! A job processes its files strictly one at a time. Every file ends in exactly one
//! [`FileOutcome`]: written, skipped (with a [`SkipReason`]) or failed (with the [`ToolError`]).
//! Failures never stop the run; the caller inspects the returned [`RunSummary`].

pub mod observability;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ToolError;

pub use observability::{CompositeObserver, ConsoleObserver, JsonLinesObserver, RunObserver};

/// Which job produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    /// Balance-free copies of the contract exports.
    StripColumn,
    /// Identifier column added to the balance-free copies.
    InjectIds,
}

/// Severity classification of a file outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// File written.
    Info,
    /// File skipped (non-fatal, nothing written).
    Warning,
    /// File failed.
    Error,
}

/// Context about a run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The job being run.
    pub job: Job,
    /// Directory the input files were discovered under.
    pub root: PathBuf,
}

/// Why a file was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file has no rows, not even a header.
    Empty,
    /// The header lacks the column to strip.
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

/// Stats for a file that was transformed and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Where the result was written (the input path itself for in-place jobs).
    pub output: PathBuf,
    /// The column that was removed or added.
    pub column: String,
    /// Header width before the transformation.
    pub columns_before: usize,
    /// Header width after the transformation.
    pub columns_after: usize,
    /// Number of data rows (header excluded).
    pub data_rows: usize,
}

/// Result of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
    Written(WriteStats),
    Skipped(SkipReason),
    Failed(ToolError),
}

impl FileOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Written(_) => Severity::Info,
            Self::Skipped(_) => Severity::Warning,
            Self::Failed(_) => Severity::Error,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Written(_) => "written",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Outcome of one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Aggregated outcomes of a run, in processing order.
#[derive(Debug)]
pub struct RunSummary {
    pub job: Job,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn new(job: Job) -> Self {
        Self { job, files: Vec::new() }
    }

    /// `true` when discovery matched nothing.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn written_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_written()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn failed_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Paths written by the run, in processing order.
    ///
    /// For the column stripper these are the derived files, i.e. exactly the inputs the identifier
    /// injector will pick up next.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter_map(|f| match &f.outcome {
                FileOutcome::Written(stats) => Some(stats.output.clone()),
                _ => None,
            })
            .collect()
    }

    /// Looks up the report for an input path.
    pub fn report_for(&self, path: &Path) -> Option<&FileReport> {
        self.files.iter().find(|f| f.path == path)
    }

    fn count(&self, severity: Severity) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome.severity() == severity)
            .count()
    }
}

/// Process `files` one at a time with `process`, reporting to `observer`.
///
/// `process` must not panic on bad input; errors belong in [`FileOutcome::Failed`].
pub fn run_files<F>(
    ctx: &RunContext,
    files: &[PathBuf],
    observer: Option<&dyn RunObserver>,
    mut process: F,
) -> RunSummary
where
    F: FnMut(&Path) -> FileOutcome,
{
    if let Some(obs) = observer {
        obs.on_run_started(ctx, files);
    }

    let mut summary = RunSummary::new(ctx.job);
    for path in files {
        if let Some(obs) = observer {
            obs.on_file_started(ctx, path);
        }
        let report = FileReport {
            path: path.clone(),
            outcome: process(path),
        };
        if let Some(obs) = observer {
            obs.on_file_finished(ctx, &report);
        }
        summary.files.push(report);
    }

    if let Some(obs) = observer {
        obs.on_run_finished(ctx, &summary);
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{run_files, FileOutcome, Job, RunContext, Severity, SkipReason, WriteStats};

    fn ctx() -> RunContext {
        RunContext {
            job: Job::StripColumn,
            root: PathBuf::from("."),
        }
    }

    fn written(path: &Path) -> FileOutcome {
        FileOutcome::Written(WriteStats {
            output: path.with_extension("out"),
            column: "Saldo".to_string(),
            columns_before: 3,
            columns_after: 2,
            data_rows: 1,
        })
    }

    #[test]
    fn summary_counts_each_outcome_kind() {
        let files: Vec<PathBuf> = ["a.csv", "b.csv", "c.csv", "d.csv"].iter().map(PathBuf::from).collect();
        let summary = run_files(&ctx(), &files, None, |p| match p.to_str().unwrap() {
            "a.csv" | "d.csv" => written(p),
            "b.csv" => FileOutcome::Skipped(SkipReason::Empty),
            _ => FileOutcome::Failed(std::io::Error::other("boom").into()),
        });

        assert_eq!(summary.files.len(), 4);
        assert_eq!(summary.written_count(), 2);
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.written_paths(), vec![PathBuf::from("a.out"), PathBuf::from("d.out")]);
        assert_eq!(
            summary.report_for(Path::new("c.csv")).unwrap().outcome.severity(),
            Severity::Error
        );
    }

    #[test]
    fn files_are_processed_in_given_order() {
        let files: Vec<PathBuf> = ["z.csv", "a.csv", "m.csv"].iter().map(PathBuf::from).collect();
        let mut seen = Vec::new();
        let summary = run_files(&ctx(), &files, None, |p| {
            seen.push(p.to_path_buf());
            FileOutcome::Skipped(SkipReason::Empty)
        });
        assert_eq!(seen, files);
        let order: Vec<PathBuf> = summary.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(order, files);
    }

    #[test]
    fn no_files_gives_empty_summary() {
        let summary = run_files(&ctx(), &[], None, |_| unreachable!());
        assert!(summary.is_empty());
        assert_eq!(summary.job, Job::StripColumn);
    }
}
