//! Symbol fallback rule.
//!
//! The last rule in the priority table. It accepts any single
//! non-whitespace character, which guarantees the classifier always makes
//! progress. Comment markers are checked first and reported as discards
//! instead of `/` symbols.

use super::core::{Classification, Classifier, Rule};
use crate::token::TokenKind;

impl Classifier {
    /// Matches one non-whitespace character, or a comment marker.
    pub(crate) fn match_symbol(&self, text: &str) -> Option<Classification> {
        if let Some(comment) = self.match_comment(text) {
            return Some(comment);
        }

        let c = text.chars().next().filter(|c| !c.is_whitespace())?;
        Some(Classification::token(
            Rule::Symbol,
            TokenKind::Symbol(c),
            c.len_utf8(),
        ))
    }
}
