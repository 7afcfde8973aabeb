//! Common types and utilities for jackt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use jackc_lex::{IdentifierRule, LineNumbering};
use serde::{Deserialize, Serialize};

use crate::error::{JacktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for the token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `<line>\t<category>\t<lexeme>`.
    #[default]
    Text,
    /// Array of per-file token lists.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Option Parsing
// ============================================================================

/// Parse an output format option, failing with a validation error.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    OutputFormat::from_name(s).ok_or_else(|| {
        JacktError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, s))
    })
}

/// Parse a line numbering policy (`global` or `per-file`).
pub fn parse_line_numbering(s: &str) -> Result<LineNumbering> {
    match s.to_lowercase().as_str() {
        "global" => Ok(LineNumbering::Global),
        "per-file" | "perfile" => Ok(LineNumbering::PerFile),
        _ => Err(JacktError::Validation(format!(
            "{} {}",
            error_messages::UNKNOWN_LINE_NUMBERING,
            s
        ))),
    }
}

/// Parse an identifier rule (`alphanumeric` or `alphabetic`).
pub fn parse_identifier_rule(s: &str) -> Result<IdentifierRule> {
    match s.to_lowercase().as_str() {
        "alphanumeric" => Ok(IdentifierRule::Alphanumeric),
        "alphabetic" => Ok(IdentifierRule::Alphabetic),
        _ => Err(JacktError::Validation(format!(
            "{} {}",
            error_messages::UNKNOWN_IDENTIFIER_RULE,
            s
        ))),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when the source extension is empty.
    pub const EMPTY_EXTENSION: &str = "Source extension must not be empty";

    /// Error when an unknown output format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when an unknown line numbering policy is specified.
    pub const UNKNOWN_LINE_NUMBERING: &str = "Unknown line numbering:";

    /// Error when an unknown identifier rule is specified.
    pub const UNKNOWN_IDENTIFIER_RULE: &str = "Unknown identifier rule:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Warning when the compilation unit yields no tokens.
    pub const NO_TOKENS: &str = "No tokens produced from";

    /// Warning when a single file yields no tokens.
    pub const EMPTY_FILE: &str = "File produced no tokens:";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_parse_format_error() {
        let err = parse_format("xml").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Unknown format: xml");
    }

    #[test]
    fn test_parse_line_numbering() {
        assert_eq!(parse_line_numbering("global").unwrap(), LineNumbering::Global);
        assert_eq!(parse_line_numbering("per-file").unwrap(), LineNumbering::PerFile);
        assert!(parse_line_numbering("local").is_err());
    }

    #[test]
    fn test_parse_identifier_rule() {
        assert_eq!(
            parse_identifier_rule("Alphabetic").unwrap(),
            IdentifierRule::Alphabetic
        );
        assert_eq!(
            parse_identifier_rule("alphanumeric").unwrap(),
            IdentifierRule::Alphanumeric
        );
        assert!(parse_identifier_rule("unicode").is_err());
    }
}
