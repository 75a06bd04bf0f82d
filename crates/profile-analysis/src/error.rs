// File: crates/profile-analysis/src/error.rs
// Summary: Error type for loading profiler samples and measurement tables.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: '{token}' is not an integer")]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to parse measurement table {path}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("measurement table {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{path}: row {row}: '{value}' is not a valid {column}")]
    InvalidField {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
