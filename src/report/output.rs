use crate::error::Result;
use crate::model::CommitRecord;
use anyhow::Context;
use console::style;
use std::collections::HashSet;
use std::path::Path;

/// Header row followed by one row per record, quoted where needed.
pub fn render_csv(records: &[CommitRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    if records.is_empty() {
        writer.write_record(["project", "date", "commit_id", "author", "subject"])?;
    }
    writer
        .into_inner()
        .map_err(|e| crate::error::ReportError::Io(e.into_error()))
}

/// Replaces `path` with the rendered report, creating parent directories.
pub fn write_report(path: &Path, records: &[CommitRecord]) -> anyhow::Result<()> {
    let data = render_csv(records).context("Failed to render report")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}

pub fn output_summary(records: &[CommitRecord], path: &Path) {
    let projects: HashSet<_> = records.iter().map(|r| &r.project).collect();
    println!(
        "Wrote {} commits from {} projects to {}",
        style(records.len()).cyan(),
        style(projects.len()).cyan(),
        style(path.display()).dim()
    );
}
