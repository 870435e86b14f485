use super::parse::parse_records;
use crate::error::Result;
use crate::model::CommitRecord;

/// Newest first; equal dates are ordered by project, then keep their input order.
pub fn sort_records(records: &mut [CommitRecord]) {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.project.cmp(&b.project))
    });
}

/// Parses every collected line and sorts the result. Any bad line aborts.
pub fn build_report<S: AsRef<str>>(lines: &[S]) -> Result<Vec<CommitRecord>> {
    let mut records = parse_records(lines)?;
    sort_records(&mut records);
    Ok(records)
}
