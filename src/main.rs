mod config;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Cli, RunConfig};
use crate::error::AppError;
use crate::input::interactive::Prompter;
use crate::input::{DataSource, load_dataset};
use crate::pipeline::stage3_summary::analyze;
use crate::pipeline::stage4_report::{ReportTargets, write_reports};
use crate::report::console::render_console;

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = RunConfig::from_cli(cli);
    let stdin = std::io::stdin();
    let mut prompter =
        Prompter::new(stdin.lock(), std::io::stdout()).with_max_attempts(config.max_attempts);

    let source = match config.source {
        Some(source) => source,
        None => prompter.choose_mode()?.into(),
    };
    let written = execute(&source, &config.targets, &mut prompter)?;

    let mut stdout = prompter.into_writer();
    for path in &written {
        writeln!(stdout, "\n💾 Results saved to '{}'", path.display())?;
    }
    stdout.flush()?;
    Ok(())
}

fn execute<R: BufRead, W: Write>(
    source: &DataSource,
    targets: &ReportTargets,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<PathBuf>, AppError> {
    let dataset = load_dataset(source, prompter)?;
    let analysis = analyze(&dataset)?;
    prompter.print(&render_console(&dataset, &analysis))?;
    write_reports(&dataset, &analysis, targets)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
