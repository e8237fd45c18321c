//! Error module for the suffix index application.
//!
//! This module provides the application-level error type, wrapping the errors
//! of configuration loading, corpus input and the index itself.

use thiserror::Error;

use crate::data_structures::SuffixIndexError;

pub mod config;

/// Result type alias used throughout the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the application layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading a corpus or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors reported by the suffix index.
    #[error("Index error: {0}")]
    Index(#[from] SuffixIndexError),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
