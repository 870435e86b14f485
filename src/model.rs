use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the report. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub project: String,
    #[serde(with = "report_date")]
    pub date: NaiveDate,
    pub commit_id: String,
    pub author: String,
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct LogQuery {
    pub author: String,
    pub since_days: u32,
}

impl LogQuery {
    pub fn new(author: impl Into<String>, since_days: u32) -> Self {
        Self {
            author: author.into(),
            since_days,
        }
    }
}

/// Raw `git log` lines for one target, tagged with its project name.
#[derive(Debug, Clone, Default)]
pub struct TargetLog {
    pub project: String,
    pub lines: Vec<String>,
}

impl TargetLog {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

mod report_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
