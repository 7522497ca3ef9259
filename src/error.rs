use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("score matrix has no rows")]
    EmptyMatrix,
    #[error("row {row} has no scores")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} scores, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{what}: {found} labels for {expected} entries")]
    LabelMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("entity label at row {row} is empty")]
    EmptyLabel { row: usize },
    #[error("duplicate entity label {label:?} at row {row}")]
    DuplicateLabel { row: usize, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{field}: {value:?} is not a number")]
    NotANumber { field: String, value: String },
    #[error("{field}: {value:?} is not a count between 1 and {max}")]
    InvalidCount {
        field: String,
        value: String,
        max: usize,
    },
    #[error("{field}: score {value:?} must be finite and non-negative")]
    InvalidScore { field: String, value: String },
    #[error("{field}: {reason}")]
    InvalidName { field: String, reason: String },
    #[error("{field}: input ended before an answer was given")]
    UnexpectedEof { field: String },
    #[error("table line {line}: {reason}")]
    Table { line: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
