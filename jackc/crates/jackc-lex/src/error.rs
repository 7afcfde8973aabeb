//! Error types for the Jack tokenizer.
//!
//! Every error aborts tokenization of the whole compilation unit. Errors
//! carry enough context (file, line) for the caller to build a message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for tokenizer operations.
#[derive(Debug, Error)]
pub enum LexError {
    /// A queued source file, or the input directory, could not be opened.
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from an open source file failed.
    #[error("failed to read {file} at line {line}: {source}")]
    Io {
        /// Name of the file being read.
        file: String,
        /// Line number of the failed read.
        line: u32,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The classifier made no progress on a non-empty buffer.
    ///
    /// The symbol fallback accepts any non-whitespace character, so this
    /// indicates a classifier bug rather than bad input.
    #[error("no lexeme recognized in {file} at line {line}: {text:?}")]
    MalformedLexeme {
        /// Name of the file being scanned.
        file: String,
        /// Line number of the buffer.
        line: u32,
        /// Remaining buffer text.
        text: String,
    },
}

impl LexError {
    /// Returns the line the error occurred on, if it is tied to one.
    pub fn line(&self) -> Option<u32> {
        match self {
            LexError::SourceNotFound { .. } => None,
            LexError::Io { line, .. } | LexError::MalformedLexeme { line, .. } => Some(*line),
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, LexError>;
