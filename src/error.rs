use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by ingestion, mapping, and pipeline code.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O error (e.g. permission denied while writing output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be opened. Carries the path so batch failures
    /// name the offending table.
    #[error("cannot open input '{}': {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV-level read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The input does not conform to the expected table layout (missing
    /// required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Two canonical nutrients map to the same source name, so the inverse
    /// mapping would be ambiguous. This is a configuration error in the
    /// nutrient table, not a data error.
    #[error(
        "nutrient mapping is not invertible: '{first}' and '{second}' both map to source name '{source_name}'"
    )]
    MappingCollision {
        first: String,
        second: String,
        source_name: String,
    },
}
