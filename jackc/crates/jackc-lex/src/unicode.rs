//! Character classes used by the classifier.
//!
//! Jack source is ASCII-oriented: identifiers and integer literals are
//! ASCII-only, while any other non-whitespace character (including
//! non-ASCII) is accepted by the symbol fallback.

use crate::config::IdentifierRule;

/// Checks if a character can start an identifier under `rule`.
///
/// # Example
///
/// ```
/// use jackc_lex::unicode::is_ident_start;
/// use jackc_lex::IdentifierRule;
///
/// assert!(is_ident_start('a', IdentifierRule::Alphanumeric));
/// assert!(is_ident_start('_', IdentifierRule::Alphanumeric));
/// assert!(!is_ident_start('_', IdentifierRule::Alphabetic));
/// assert!(!is_ident_start('1', IdentifierRule::Alphanumeric));
/// assert!(!is_ident_start('α', IdentifierRule::Alphanumeric));
/// ```
#[inline]
pub fn is_ident_start(c: char, rule: IdentifierRule) -> bool {
    match rule {
        IdentifierRule::Alphanumeric => c == '_' || c.is_ascii_alphabetic(),
        IdentifierRule::Alphabetic => c.is_ascii_alphabetic(),
    }
}

/// Checks if a character can continue an identifier under `rule`.
///
/// # Example
///
/// ```
/// use jackc_lex::unicode::is_ident_continue;
/// use jackc_lex::IdentifierRule;
///
/// assert!(is_ident_continue('7', IdentifierRule::Alphanumeric));
/// assert!(!is_ident_continue('7', IdentifierRule::Alphabetic));
/// ```
#[inline]
pub fn is_ident_continue(c: char, rule: IdentifierRule) -> bool {
    match rule {
        IdentifierRule::Alphanumeric => c == '_' || c.is_ascii_alphanumeric(),
        IdentifierRule::Alphabetic => c.is_ascii_alphabetic(),
    }
}

/// Returns the byte length of the longest prefix of `text` whose characters
/// all satisfy `pred`.
#[inline]
pub fn prefix_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}

/// Returns the byte length of the leading whitespace of `text`.
#[inline]
pub fn leading_whitespace_len(text: &str) -> usize {
    prefix_len(text, char::is_whitespace)
}
