//! Tokenizer configuration.
//!
//! Every policy the tokenizer applies that could reasonably differ between
//! toolchains lives here, so that each one is an explicit, testable choice
//! rather than a side effect of the scanning code.

use serde::{Deserialize, Deserializer, Serialize};

/// Default source file extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "jack";

/// Configuration for a [`Tokenizer`](crate::Tokenizer).
///
/// # Example
///
/// ```
/// use jackc_lex::{IdentifierRule, LineNumbering, TokenizerConfig};
///
/// let config = TokenizerConfig::default()
///     .with_extension("src")
///     .with_line_numbering(LineNumbering::PerFile);
///
/// assert_eq!(config.extension, "src");
/// assert_eq!(config.identifiers, IdentifierRule::Alphanumeric);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Extension (without the dot) of the files collected from a directory.
    #[serde(
        default = "default_extension",
        deserialize_with = "deserialize_extension"
    )]
    pub extension: String,

    /// Scope of the line counter.
    #[serde(default)]
    pub line_numbering: LineNumbering,

    /// Which characters make up an identifier.
    #[serde(default)]
    pub identifiers: IdentifierRule,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}

/// Accepts `"src"` and `".src"` alike, as [`TokenizerConfig::with_extension`] does.
fn deserialize_extension<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let extension = String::deserialize(deserializer)?;
    Ok(normalize_extension(&extension))
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            line_numbering: LineNumbering::default(),
            identifiers: IdentifierRule::default(),
        }
    }
}

impl TokenizerConfig {
    /// Sets the source extension. A leading dot is ignored.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = normalize_extension(&extension.into());
        self
    }

    /// Sets the line numbering policy.
    pub fn with_line_numbering(mut self, line_numbering: LineNumbering) -> Self {
        self.line_numbering = line_numbering;
        self
    }

    /// Sets the identifier rule.
    pub fn with_identifiers(mut self, identifiers: IdentifierRule) -> Self {
        self.identifiers = identifiers;
        self
    }
}

/// Scope of the tokenizer's line counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineNumbering {
    /// One counter for the whole compilation unit. Line numbers are unique
    /// across files and never decrease along the token stream.
    #[default]
    Global,

    /// The counter restarts at each file, so line numbers match what an
    /// editor shows for that file. Line numbers drop at file boundaries.
    PerFile,
}

/// Which character runs the classifier accepts as identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierRule {
    /// `[A-Za-z_][A-Za-z0-9_]*`, as the Jack grammar defines identifiers.
    #[default]
    Alphanumeric,

    /// `[A-Za-z]+`. Digits and underscores end the identifier and are
    /// classified separately, so `x1` lexes as `x` followed by `1`.
    Alphabetic,
}
