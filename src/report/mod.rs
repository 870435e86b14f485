pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;
pub mod parse;

pub use aggregate::{build_report, sort_records};
pub use exec::{exec, run};
pub use fetch::collect_lines;
pub use output::{output_summary, render_csv, write_report};
pub use parse::{parse_record, parse_records};
