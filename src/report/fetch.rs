use crate::git::CommitLog;
use crate::model::LogQuery;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Queries every target in order and concatenates their lines.
///
/// A target that fails is reported on stderr and skipped. A target without
/// commits gets one `no commits for <project>` notice written to `out`.
pub fn collect_lines<L, W>(
    log: &L,
    targets: &[PathBuf],
    query: &LogQuery,
    out: &mut W,
    show_progress: bool,
) -> io::Result<Vec<String>>
where
    L: CommitLog + ?Sized,
    W: Write,
{
    let mut lines = Vec::new();

    for target in targets {
        let pb = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message(format!("Querying {}...", target.display()));
            Some(pb)
        } else {
            None
        };

        let result = log.query(target, query);

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        match result {
            Ok(target_log) if target_log.is_empty() => {
                writeln!(out, "no commits for {}", target_log.project)?;
            }
            Ok(target_log) => {
                debug!(project = %target_log.project, count = target_log.lines.len(), "collected");
                lines.extend(target_log.lines);
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "skipping target");
                eprintln!(
                    "{} skipping {}: {}",
                    style("warning:").yellow().bold(),
                    target.display(),
                    e
                );
            }
        }
    }

    Ok(lines)
}
