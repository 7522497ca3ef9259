use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{AppError, ParseError, ShapeError};
use crate::model::{Dataset, ScoreMatrix};

pub fn open_maybe_gz(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_table(path: &Path) -> Result<Dataset, AppError> {
    tracing::info!(path = %path.display(), "loading score table");
    let reader = open_maybe_gz(path)?;
    parse_table(reader)
}

pub fn parse_table<R: BufRead>(mut reader: R) -> Result<Dataset, AppError> {
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut categories: Option<Vec<String>> = None;
    let mut entities = Vec::new();
    let mut values = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();

        let Some(n_categories) = categories.as_ref().map(Vec::len) else {
            let names = cols[1..]
                .iter()
                .map(|s| s.trim().to_string())
                .collect::<Vec<_>>();
            if names.is_empty() {
                return Err(ParseError::Table {
                    line: line_no,
                    reason: "header names no categories".to_string(),
                }
                .into());
            }
            categories = Some(names);
            continue;
        };

        let row = entities.len();
        let scores = &cols[1..];
        if scores.is_empty() {
            return Err(ShapeError::EmptyRow { row }.into());
        }
        if scores.len() != n_categories {
            return Err(ShapeError::RaggedRow {
                row,
                expected: n_categories,
                found: scores.len(),
            }
            .into());
        }
        for (col, raw) in scores.iter().enumerate() {
            values.push(parse_cell(raw.trim(), line_no, col + 2)?);
        }
        entities.push(cols[0].trim().to_string());
    }

    let Some(categories) = categories else {
        return Err(ShapeError::EmptyMatrix.into());
    };
    if entities.is_empty() {
        return Err(ShapeError::EmptyMatrix.into());
    }

    let matrix = ScoreMatrix::from_flat(values, entities.len(), categories.len())?;
    tracing::debug!(
        entities = entities.len(),
        categories = categories.len(),
        lines = line_no,
        "parsed score table"
    );
    Ok(Dataset::new(matrix, entities, categories)?)
}

fn parse_cell(raw: &str, line: usize, column: usize) -> Result<f64, ParseError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(ParseError::Table {
            line,
            reason: format!("column {column}: score {raw:?} must be finite and non-negative"),
        }),
        Err(_) => Err(ParseError::Table {
            line,
            reason: format!("column {column}: {raw:?} is not a number"),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
