//! Error types for indoor map tooling.
//!
//! Rule violations found by the validator are not errors; they are reported
//! through [`crate::validation::ValidationReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading map or rule files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid JSON document of the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors raised by the map library on caller misuse.
#[derive(Debug, Error, PartialEq)]
pub enum LibraryError {
    /// No map is stored under the given id.
    #[error("map not found: {map_id}")]
    NotFound { map_id: String },

    /// The caller does not own the map.
    #[error("unauthorized to {action} this map")]
    Unauthorized { action: &'static str },

    /// The map breaks one or more validation rules.
    #[error("map validation failed: {}", errors.join(", "))]
    Validation { errors: Vec<String> },
}
