use super::CommitLog;
use crate::error::{ReportError, Result};
use crate::model::{LogQuery, TargetLog};
use std::path::Path;
use std::process::Command;
use tracing::debug;

const GIT_COMMAND: &str = "git";

/// Runs `git log` as a subprocess inside each target directory.
#[derive(Debug, Clone, Default)]
pub struct GitLog;

impl GitLog {
    pub fn new() -> Self {
        Self
    }
}

impl CommitLog for GitLog {
    fn query(&self, target: &Path, query: &LogQuery) -> Result<TargetLog> {
        let project = project_name(target)?;
        let args = log_args(&project, query);
        debug!(path = %target.display(), ?args, "running git log");

        let output = Command::new(GIT_COMMAND)
            .args(&args)
            .current_dir(target)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ReportError::GitNotFound
                } else {
                    ReportError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(ReportError::GitFailed {
                project,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            });
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        debug!(%project, count = lines.len(), "git log finished");

        Ok(TargetLog { project, lines })
    }
}

/// Base name of the canonicalized target directory.
pub fn project_name(target: &Path) -> Result<String> {
    if !target.is_dir() {
        return Err(ReportError::TargetNotFound(target.to_path_buf()));
    }
    let canonical = std::fs::canonicalize(target)?;
    Ok(canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical.to_string_lossy().into_owned()))
}

pub fn log_args(project: &str, query: &LogQuery) -> Vec<String> {
    // `%` would otherwise start a placeholder in the pretty format
    let project = project.replace('%', "%%");
    vec![
        "log".to_string(),
        "--no-color".to_string(),
        "--no-merges".to_string(),
        format!("--since={} days", query.since_days),
        format!("--author={}", query.author),
        format!("--pretty=format:%as\t{project}\t%h\t%ae\t%s"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn args_filter_by_author_window_and_merges() {
        let args = log_args("toolbox", &LogQuery::new("jane@example.com", 31));
        assert_eq!(
            args,
            vec![
                "log",
                "--no-color",
                "--no-merges",
                "--since=31 days",
                "--author=jane@example.com",
                "--pretty=format:%as\ttoolbox\t%h\t%ae\t%s",
            ]
        );
    }

    #[test]
    fn percent_in_project_is_escaped() {
        let args = log_args("100%done", &LogQuery::new("me", 0));
        assert_eq!(args[5], "--pretty=format:%as\t100%%done\t%h\t%ae\t%s");
        assert_eq!(args[3], "--since=0 days");
    }

    #[test]
    fn project_name_is_last_component() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("projA");
        std::fs::create_dir(&target).unwrap();
        assert_eq!(project_name(&target).unwrap(), "projA");
    }

    #[test]
    fn project_name_resolves_relative_components() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("projA").join("nested")).unwrap();
        let target = dir.path().join("projA").join("nested").join("..");
        assert_eq!(project_name(&target).unwrap(), "projA");
    }

    #[test]
    fn missing_target_is_rejected() {
        let dir = tempdir().unwrap();
        let err = project_name(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ReportError::TargetNotFound(_)));
        assert!(err.is_query_failure());
    }

    #[test]
    fn query_outside_repository_fails() {
        if Command::new(GIT_COMMAND).arg("--version").output().is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let target = dir.path().join("plain");
        std::fs::create_dir(&target).unwrap();
        let inside_repo = Command::new(GIT_COMMAND)
            .args(["rev-parse", "--git-dir"])
            .current_dir(&target)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(true);
        if inside_repo {
            return;
        }
        let err = GitLog::new()
            .query(&target, &LogQuery::new("me", 31))
            .unwrap_err();
        assert!(matches!(err, ReportError::GitFailed { ref project, .. } if project == "plain"));
    }
}
