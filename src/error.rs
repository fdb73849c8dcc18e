//! Error types for the scene model
//!
//! This module defines custom error types for scene construction and
//! parsing, providing clear error messages and proper error propagation.

use thiserror::Error;

/// Custom error type for scene model operations
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field '{0}': {1}")]
    InvalidValue(String, String),
}

/// Result type alias for scene model operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::JsonError(err.to_string())
    }
}
