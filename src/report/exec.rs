use super::{build_report, collect_lines, output_summary, write_report};
use crate::cli::CreateArgs;
use crate::git::{CommitLog, GitLog};
use crate::model::{CommitRecord, LogQuery};
use anyhow::Context;
use std::io::Write;

pub fn exec(args: CreateArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let records = run(&GitLog::new(), &args, &mut stdout.lock(), true)?;
    output_summary(&records, &args.output);
    Ok(())
}

/// Collects, sorts and writes the report. Nothing is written if any line fails to parse.
pub fn run<L, W>(
    log: &L,
    args: &CreateArgs,
    out: &mut W,
    show_progress: bool,
) -> anyhow::Result<Vec<CommitRecord>>
where
    L: CommitLog + ?Sized,
    W: Write,
{
    let query = LogQuery::new(args.author.clone(), args.since);

    let lines = collect_lines(log, &args.targets, &query, out, show_progress)
        .context("Failed to collect commit history")?;

    let records = build_report(&lines).context("Failed to build report")?;

    write_report(&args.output, &records)?;

    Ok(records)
}
