use thiserror::Error;

/// Convenience result type used across the crate.
pub type ToolResult<T> = Result<T, ToolError>;

/// Error type returned by the CSV jobs and their building blocks.
///
/// Per-file errors never abort a run; they are captured in a
/// [`crate::run::FileOutcome::Failed`] instead. Only run-level problems (such as an invalid glob
/// pattern) surface as an `Err` from a job entrypoint.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error (including invalid UTF-8 in a field).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A discovery pattern could not be compiled.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The header row does not contain the requested column.
    #[error("column '{column}' not found. headers={available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}
