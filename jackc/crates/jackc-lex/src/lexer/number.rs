//! Integer constant rule.

use super::core::{Classification, Classifier, Rule};
use crate::token::TokenKind;
use crate::unicode::prefix_len;

impl Classifier {
    /// Matches a run of ASCII decimal digits at the front of `text`.
    ///
    /// The digits are kept as text; range checking (Jack allows 0..=32767)
    /// belongs to later phases.
    pub(crate) fn match_integer(&self, text: &str) -> Option<Classification> {
        let len = prefix_len(text, |c| c.is_ascii_digit());
        if len == 0 {
            return None;
        }
        let kind = TokenKind::IntegerConstant(text[..len].to_string());
        Some(Classification::token(Rule::IntegerConstant, kind, len))
    }
}
