use std::collections::HashSet;

use crate::error::ShapeError;

/// Row-major score table with at least one row and one column, no ragged rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    values: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl ScoreMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::EmptyMatrix);
        };
        let n_cols = first.len();
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (row, scores) in rows.into_iter().enumerate() {
            if scores.is_empty() {
                return Err(ShapeError::EmptyRow { row });
            }
            if scores.len() != n_cols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: n_cols,
                    found: scores.len(),
                });
            }
            values.extend(scores);
        }
        Ok(Self {
            values,
            n_rows,
            n_cols,
        })
    }

    pub fn from_flat(values: Vec<f64>, n_rows: usize, n_cols: usize) -> Result<Self, ShapeError> {
        if n_rows == 0 {
            return Err(ShapeError::EmptyMatrix);
        }
        if n_cols == 0 {
            return Err(ShapeError::EmptyRow { row: 0 });
        }
        let expected = n_rows * n_cols;
        if values.len() != expected {
            let row = (values.len() / n_cols).min(n_rows - 1);
            let found = values.len().saturating_sub(row * n_cols);
            return Err(ShapeError::RaggedRow {
                row,
                expected: n_cols,
                found,
            });
        }
        Ok(Self {
            values,
            n_rows,
            n_cols,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_cols)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub matrix: ScoreMatrix,
    pub entities: Vec<String>,
    pub categories: Vec<String>,
}

impl Dataset {
    pub fn new(
        matrix: ScoreMatrix,
        entities: Vec<String>,
        categories: Vec<String>,
    ) -> Result<Self, ShapeError> {
        if entities.len() != matrix.n_rows() {
            return Err(ShapeError::LabelMismatch {
                what: "entities",
                expected: matrix.n_rows(),
                found: entities.len(),
            });
        }
        if categories.len() != matrix.n_cols() {
            return Err(ShapeError::LabelMismatch {
                what: "categories",
                expected: matrix.n_cols(),
                found: categories.len(),
            });
        }
        let mut seen = HashSet::with_capacity(entities.len());
        for (row, label) in entities.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ShapeError::EmptyLabel { row });
            }
            if !seen.insert(label.as_str()) {
                return Err(ShapeError::DuplicateLabel {
                    row,
                    label: label.clone(),
                });
            }
        }
        Ok(Self {
            matrix,
            entities,
            categories,
        })
    }

    pub fn n_entities(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn n_categories(&self) -> usize {
        self.matrix.n_cols()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
