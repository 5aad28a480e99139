use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use super::{FileOutcome, FileReport, Job, RunContext, RunSummary, SkipReason};

/// Observer interface for job progress.
///
/// Implementors can print progress, record metrics or keep an audit trail. Every hook defaults to
/// a no-op.
pub trait RunObserver: Send + Sync {
    /// Called once after discovery, before any file is processed. `files` may be empty.
    fn on_run_started(&self, _ctx: &RunContext, _files: &[PathBuf]) {}

    /// Called before a file is read.
    fn on_file_started(&self, _ctx: &RunContext, _path: &Path) {}

    /// Called once a file reached its outcome.
    fn on_file_finished(&self, _ctx: &RunContext, _report: &FileReport) {}

    /// Called after the last file.
    fn on_run_finished(&self, _ctx: &RunContext, _summary: &RunSummary) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RunObserver for CompositeObserver {
    fn on_run_started(&self, ctx: &RunContext, files: &[PathBuf]) {
        for o in &self.observers {
            o.on_run_started(ctx, files);
        }
    }

    fn on_file_started(&self, ctx: &RunContext, path: &Path) {
        for o in &self.observers {
            o.on_file_started(ctx, path);
        }
    }

    fn on_file_finished(&self, ctx: &RunContext, report: &FileReport) {
        for o in &self.observers {
            o.on_file_finished(ctx, report);
        }
    }

    fn on_run_finished(&self, ctx: &RunContext, summary: &RunSummary) {
        for o in &self.observers {
            o.on_run_finished(ctx, summary);
        }
    }
}

/// Prints human-readable progress to stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// Render the lines printed for one finished file (without the `Processing:` line).
    pub fn outcome_lines(job: Job, report: &FileReport) -> Vec<String> {
        let path = report.path.display();
        match (&report.outcome, job) {
            (FileOutcome::Written(stats), Job::StripColumn) => vec![
                format!("  ✓ Created duplicate: {}", stats.output.display()),
                format!(
                    "  ✓ Removed '{}' column ({} → {} columns)",
                    stats.column, stats.columns_before, stats.columns_after
                ),
            ],
            (FileOutcome::Written(stats), Job::InjectIds) => vec![
                format!(
                    "  ✓ Added '{}' column with nanoids ({} → {} columns)",
                    stats.column, stats.columns_before, stats.columns_after
                ),
                format!("  ✓ Generated {} unique nanoids", stats.data_rows),
            ],
            (FileOutcome::Skipped(SkipReason::Empty), _) => vec![format!("  Warning: {path} is empty")],
            (FileOutcome::Skipped(SkipReason::MissingColumn { column, available }), _) => vec![
                format!("  Warning: '{column}' column not found in {path}"),
                format!("  Available columns: {available:?}"),
            ],
            (FileOutcome::Failed(err), _) => vec![format!("  ✗ Error processing {path}: {err}")],
        }
    }
}

impl RunObserver for ConsoleObserver {
    fn on_run_started(&self, ctx: &RunContext, files: &[PathBuf]) {
        match (ctx.job, files.len()) {
            (Job::StripColumn, 0) => println!("No CSV files found matching the patterns"),
            (Job::InjectIds, 0) => println!("No _no_balance CSV files found"),
            (Job::StripColumn, n) => println!("Found {n} CSV files to process:"),
            (Job::InjectIds, n) => println!("Found {n} _no_balance CSV files to process:"),
        }
    }

    fn on_file_started(&self, _ctx: &RunContext, path: &Path) {
        println!("\nProcessing: {}", path.display());
    }

    fn on_file_finished(&self, ctx: &RunContext, report: &FileReport) {
        for line in Self::outcome_lines(ctx.job, report) {
            println!("{line}");
        }
    }

    fn on_run_finished(&self, _ctx: &RunContext, summary: &RunSummary) {
        if summary.is_empty() {
            return;
        }
        println!(
            "\nDone: {} written, {} skipped, {} failed",
            summary.written_count(),
            summary.skipped_count(),
            summary.failed_count()
        );
    }
}

/// Appends one JSON object per event to a local log file.
#[derive(Debug)]
pub struct JsonLinesObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesObserver {
    /// Create an observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: serde_json::Value) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{event}");
        }
    }
}

impl RunObserver for JsonLinesObserver {
    fn on_run_started(&self, ctx: &RunContext, files: &[PathBuf]) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "run_started",
            "job": ctx.job,
            "root": ctx.root.display().to_string(),
            "files": files.len(),
        }));
    }

    fn on_file_finished(&self, ctx: &RunContext, report: &FileReport) {
        let mut event = json!({
            "ts": unix_ts(),
            "event": "file_finished",
            "job": ctx.job,
            "path": report.path.display().to_string(),
            "outcome": report.outcome.kind(),
            "severity": report.outcome.severity(),
        });
        let detail = match &report.outcome {
            FileOutcome::Written(stats) => json!({
                "output": stats.output.display().to_string(),
                "column": stats.column,
                "columns_before": stats.columns_before,
                "columns_after": stats.columns_after,
                "data_rows": stats.data_rows,
            }),
            FileOutcome::Skipped(SkipReason::Empty) => json!({ "reason": "empty" }),
            FileOutcome::Skipped(SkipReason::MissingColumn { column, available }) => json!({
                "reason": "missing_column",
                "column": column,
                "available": available,
            }),
            FileOutcome::Failed(err) => json!({ "error": err.to_string() }),
        };
        event["detail"] = detail;
        self.append(event);
    }

    fn on_run_finished(&self, ctx: &RunContext, summary: &RunSummary) {
        self.append(json!({
            "ts": unix_ts(),
            "event": "run_finished",
            "job": ctx.job,
            "written": summary.written_count(),
            "skipped": summary.skipped_count(),
            "failed": summary.failed_count(),
        }));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
