//! Error types for the recipe-store crate.

use thiserror::Error;

/// Errors that can occur while loading, querying or writing the recipe store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store file could not be found and creation was not requested
    #[error("Store file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing the store file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The store file is not a valid JSON array of recipes
    ///
    /// `line` is the 1-based line reported by the JSON decoder.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Recipes could not be encoded for writing back to disk
    #[error("Encode error: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// A field name or value had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A recipe with the same id is already stored
    #[error("Recipe with id {id} already exists")]
    DuplicateId { id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
