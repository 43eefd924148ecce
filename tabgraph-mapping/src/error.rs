//! Mapping error types
//!
//! Only caller misconfiguration is an error. Missing data in a cell or a
//! pattern argument is expressed as an empty result, never as `Err`.

use thiserror::Error;

/// Mapping errors
#[derive(Debug, Error)]
pub enum MappingError {
    /// Capture pattern failed to compile
    #[error("Invalid capture pattern '{pattern}': {source}")]
    InvalidCapturePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Pattern name not in the template library
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// Pattern binding with the wrong number of arguments
    #[error("Pattern {pattern} takes {expected} arguments, got {found}")]
    PatternArity {
        pattern: &'static str,
        expected: usize,
        found: usize,
    },

    /// Error parsing a mapping document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid property value in a mapping document or builder call
    #[error("Invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },

    /// Row is narrower than a column the mapping reads
    #[error("Column {column} out of range for row of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
