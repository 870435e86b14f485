use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SINCE_DAYS: u32 = 31;
pub const DEFAULT_OUTPUT: &str = "./reports/report.csv";

#[derive(Parser)]
#[command(name = "commit-report")]
#[command(about = "Generates a consolidated commit report across several repositories")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CreateArgs {
    #[arg(long = "targets", num_args = 1.., required = true, help = "Target repository directories")]
    pub targets: Vec<PathBuf>,

    #[arg(long, help = "Author filter passed to git log (name or e-mail pattern)")]
    pub author: String,

    #[arg(
        long,
        default_value_t = DEFAULT_SINCE_DAYS,
        help = "Number of days to look back from today"
    )]
    pub since: u32,

    #[arg(long, default_value = DEFAULT_OUTPUT, help = "Path of the CSV report to write")]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query every target and write the sorted CSV report
    Create(CreateArgs),
    /// Reserved for merging several reports; currently does nothing
    Consolidate,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Create(args) => crate::report::exec(args),
            Commands::Consolidate => {
                tracing::debug!("consolidate requested; nothing to do");
                Ok(())
            }
        }
    }
}
