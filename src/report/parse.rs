use crate::error::{ReportError, Result};
use crate::model::{CommitRecord, DATE_FORMAT};
use chrono::NaiveDate;

const FIELD_COUNT: usize = 5;

/// Parses one `date\tproject\tcommit_id\tauthor\tsubject` line.
///
/// The subject is everything after the fourth tab and may contain tabs itself.
pub fn parse_record(line: &str) -> Result<CommitRecord> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, '\t').collect();
    let &[date, project, commit_id, author, subject] = fields.as_slice() else {
        return Err(ReportError::MalformedRecord {
            line: line.to_string(),
        });
    };

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| ReportError::InvalidDate {
        value: date.to_string(),
        line: line.to_string(),
    })?;

    Ok(CommitRecord {
        project: project.to_string(),
        date,
        commit_id: commit_id.to_string(),
        author: author.to_string(),
        subject: subject.to_string(),
    })
}

pub fn parse_records<S: AsRef<str>>(lines: &[S]) -> Result<Vec<CommitRecord>> {
    lines.iter().map(|line| parse_record(line.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_five_fields() {
        let record = parse_record("2024-01-10\tprojA\tabc1234\tjane@example.com\tFix the build").unwrap();
        assert_eq!(
            record,
            CommitRecord {
                project: "projA".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                commit_id: "abc1234".into(),
                author: "jane@example.com".into(),
                subject: "Fix the build".into(),
            }
        );
    }

    #[test]
    fn subject_keeps_tabs_and_commas() {
        let record = parse_record("2024-01-10\tprojA\tabc1234\tj@x\tone\ttwo, \"three\"").unwrap();
        assert_eq!(record.subject, "one\ttwo, \"three\"");
    }

    #[test]
    fn empty_subject_is_allowed() {
        let record = parse_record("2024-01-10\tprojA\tabc1234\tj@x\t").unwrap();
        assert_eq!(record.subject, "");
    }

    #[test]
    fn too_few_fields_is_malformed() {
        let err = parse_record("2024-01-10\tprojA\tabc1234\tj@x").unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
        assert!(!err.is_query_failure());
    }

    #[test]
    fn bad_date_is_rejected() {
        for date in ["2024-13-01", "10.01.2024", "", "2024-01-10T12:00:00"] {
            let line = format!("{date}\tprojA\tabc1234\tj@x\tsubject");
            let err = parse_record(&line).unwrap_err();
            assert!(
                matches!(err, ReportError::InvalidDate { ref value, .. } if value == date),
                "{date} should not parse"
            );
        }
    }

    #[test]
    fn first_bad_line_fails_the_batch() {
        let lines = [
            "2024-01-10\tprojA\tabc1234\tj@x\tok",
            "not-a-date\tprojA\tdef5678\tj@x\tbroken",
        ];
        assert!(matches!(
            parse_records(&lines),
            Err(ReportError::InvalidDate { .. })
        ));
    }
}
