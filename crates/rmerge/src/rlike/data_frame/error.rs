//! DataFrame error reporting. Library calls return `Result<T>` and leave it
//! to the calling tool to decide whether a failure is fatal.

// dependencies
use thiserror::Error;
use super::column::ColType;

/// Errors returned by DataFrame construction, join, and I/O operations.
#[derive(Debug, Error)]
pub enum DataFrameError {
    #[error("DataFrame::{caller} error: column {col_name} not found.")]
    ColumnNotFound { col_name: String, caller: &'static str },

    #[error("DataFrame::{caller} error: incoming column {col_name} already exists in data.")]
    DuplicateColumn { col_name: String, caller: &'static str },

    #[error("DataFrame::{caller} row count mismatch: {n_row_df} (df) != {n_row_new} (new)")]
    RowCountMismatch { n_row_df: usize, n_row_new: usize, caller: &'static str },

    #[error("DataFrame::{caller} error: column {col_name} is of type {found}, not {expected}.")]
    TypeMismatch { col_name: String, expected: ColType, found: ColType, caller: &'static str },

    #[error("DataFrame::{caller} error: row index {row_i} out of bounds.")]
    RowOutOfBounds { row_i: usize, caller: &'static str },

    #[error("DataFrame::join error: {0}")]
    JoinConfig(String),

    #[error("DataFrame::join error: key column {left} <{left_type}> cannot be matched to {right} <{right_type}>.")]
    KeyTypeMismatch { left: String, left_type: ColType, right: String, right_type: ColType },

    #[error("DataFrame::join error: output column {0} is ambiguous after adding suffixes.")]
    AmbiguousColumn(String),

    #[error("DataFrame::read error: failed to parse {col_type} from string '{value}' in column {col_name}.")]
    Parse { col_name: String, col_type: ColType, value: String },

    #[error("DataFrame::read error: {0}")]
    Schema(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout `rlike::data_frame`.
pub type Result<T> = std::result::Result<T, DataFrameError>;
