// src/error.rs

use thiserror::Error;

/// Errors raised while loading, segmenting, averaging or rendering a gait log.
#[derive(Debug, Error)]
pub enum GaitError {
    #[error("unknown variable name '{0}'")]
    UnknownVariable(String),
    #[error("column count mismatch: expected {expected}, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },
    #[error("data row {row} has {actual} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("no cycles to average (need at least 2 heelstrike events and one non-empty cycle)")]
    NoCycles,
    #[error("invalid event indices: {0}")]
    InvalidEvents(String),
    #[error("log contains no data rows")]
    EmptyLog,
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("{0}")]
    Usage(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for GaitError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        GaitError::Plot(format!("{value:?}"))
    }
}

// src/error.rs
