//! Error handling module for the jackt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use jackc_lex::LexError;
use thiserror::Error;

/// Main error type for the jackt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of jackt commands.
#[derive(Error, Debug)]
pub enum JacktError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised by the tokenizer. Aborts the whole compilation unit.
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JacktError.
pub type Result<T> = std::result::Result<T, JacktError>;
