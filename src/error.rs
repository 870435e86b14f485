use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Target directory not found: {}", .0.display())]
    TargetNotFound(PathBuf),
    #[error("git is not installed or not in PATH")]
    GitNotFound,
    #[error("git log failed for {project} (exit code {exit_code}): {stderr}")]
    GitFailed {
        project: String,
        stderr: String,
        exit_code: i32,
    },
    #[error("Malformed record, expected 5 tab-separated fields: {line:?}")]
    MalformedRecord { line: String },
    #[error("Invalid date '{value}' in record: {line:?}")]
    InvalidDate { value: String, line: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Whether the error is scoped to a single target and the run can go on.
    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            ReportError::TargetNotFound(_)
                | ReportError::GitNotFound
                | ReportError::GitFailed { .. }
                | ReportError::Io(_)
        )
    }
}
