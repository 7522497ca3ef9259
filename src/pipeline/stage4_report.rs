use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::model::Dataset;
use crate::pipeline::stage3_summary::Analysis;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const DEFAULT_REPORT_PATH: &str = "student_analysis.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTargets {
    pub text: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

pub fn write_reports(
    dataset: &Dataset,
    analysis: &Analysis,
    targets: &ReportTargets,
) -> Result<Vec<PathBuf>, AppError> {
    let text = targets
        .text
        .as_ref()
        .map(|path| (path, render_report_text(dataset, &analysis.stats)));
    let json = match &targets.json {
        Some(path) => Some((path, render_summary_json(dataset, analysis)?)),
        None => None,
    };

    let mut written = Vec::new();
    for (path, contents) in text.into_iter().chain(json) {
        write_text(path, &contents)?;
        tracing::info!(path = %path.display(), "report written");
        written.push(path.clone());
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
