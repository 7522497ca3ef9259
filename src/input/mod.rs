use std::io::{BufRead, Write};
use std::path::PathBuf;

pub mod demo;
pub mod interactive;
pub mod table;

use demo::demo_dataset;
use interactive::Prompter;
use table::load_table;

use crate::config::RunMode;
use crate::error::AppError;
use crate::model::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Demo,
    Interactive,
    Table(PathBuf),
}

impl From<RunMode> for DataSource {
    fn from(mode: RunMode) -> Self {
        match mode {
            RunMode::Demo => DataSource::Demo,
            RunMode::Interactive => DataSource::Interactive,
        }
    }
}

pub fn load_dataset<R: BufRead, W: Write>(
    source: &DataSource,
    prompter: &mut Prompter<R, W>,
) -> Result<Dataset, AppError> {
    let dataset = match source {
        DataSource::Demo => demo_dataset()?,
        DataSource::Interactive => prompter.read_dataset()?,
        DataSource::Table(path) => load_table(path)?,
    };
    tracing::info!(
        source = ?source,
        entities = dataset.n_entities(),
        categories = dataset.n_categories(),
        "dataset ready"
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
