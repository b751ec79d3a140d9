//! Error types for parameter loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during parameter loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parameter file not found
    #[error("Parameter file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unknown parameter file format
    #[error("Unknown parameter format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    /// Parse error with source format and location
    #[error("Failed to parse {format} parameters{location}:\n{message}")]
    ParseError {
        format: &'static str,
        location: String,
        message: String,
    },

    /// IO error
    #[error("Failed to read parameter file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value out of valid range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid integer value
    #[error("{field} must be > {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },

    /// Generic validation error
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}
