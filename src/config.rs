use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::input::DataSource;
use crate::input::interactive::MAX_ATTEMPTS;
use crate::pipeline::stage4_report::{DEFAULT_REPORT_PATH, ReportTargets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Built-in sample of five students
    Demo,
    /// Enter counts, names and marks at the prompt
    Interactive,
}

/// Per-student score statistics, rankings and class summaries.
#[derive(Debug, Parser)]
#[command(name = "kira-markstats", version)]
pub struct Cli {
    /// Skip the startup menu and run in this mode
    #[arg(long, value_enum, conflicts_with = "input")]
    pub mode: Option<RunMode>,

    /// Load scores from a tab-separated table (.tsv or .tsv.gz)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path of the text report; overwritten if it exists
    #[arg(long, value_name = "FILE", default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Do not write the text report
    #[arg(long, conflicts_with = "report")]
    pub no_report: bool,

    /// Also write a JSON summary to this path
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Times an invalid interactive answer is asked for before giving up
    #[arg(long, value_name = "N", default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: Option<DataSource>,
    pub targets: ReportTargets,
    pub max_attempts: usize,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let source = match (&cli.input, cli.mode) {
            (Some(path), _) => Some(DataSource::Table(path.clone())),
            (None, Some(mode)) => Some(mode.into()),
            (None, None) => None,
        };
        let targets = ReportTargets {
            text: (!cli.no_report).then(|| cli.report.clone()),
            json: cli.json.clone(),
        };
        Self {
            source,
            targets,
            max_attempts: cli.max_attempts,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
