//! Commit history queries against target repositories.

mod log;

pub use log::{log_args, project_name, GitLog};

use crate::error::Result;
use crate::model::{LogQuery, TargetLog};
use std::path::Path;

/// Source of raw tab-separated commit lines for one target directory.
///
/// Each line has the shape `date\tproject\tcommit_id\tauthor\tsubject`.
pub trait CommitLog {
    fn query(&self, target: &Path, query: &LogQuery) -> Result<TargetLog>;
}
