//! Keyword and identifier rules.
//!
//! Both rules look at the same identifier-shaped word at the front of the
//! buffer. A keyword only matches when that whole word is a keyword, so
//! `classic` is an identifier rather than `class` followed by `ic`.

use super::core::{Classification, Classifier, Rule};
use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start, prefix_len};

impl Classifier {
    /// Returns the byte length of the identifier-shaped word at the front of
    /// `text`, or 0 if `text` does not start with one.
    fn word_len(&self, text: &str) -> usize {
        let rule = self.identifiers;
        match text.chars().next() {
            Some(first) if is_ident_start(first, rule) => {
                let start = first.len_utf8();
                start + prefix_len(&text[start..], |c| is_ident_continue(c, rule))
            },
            _ => 0,
        }
    }

    /// Matches a keyword that spans the whole identifier-shaped word.
    pub(crate) fn match_keyword(&self, text: &str) -> Option<Classification> {
        let len = self.word_len(text);
        let kind = keyword_from_ident(&text[..len])?;
        Some(Classification::token(Rule::Keyword, kind, len))
    }

    /// Matches the longest identifier at the front of `text`.
    pub(crate) fn match_identifier(&self, text: &str) -> Option<Classification> {
        let len = self.word_len(text);
        if len == 0 {
            return None;
        }
        let kind = TokenKind::Identifier(text[..len].to_string());
        Some(Classification::token(Rule::Identifier, kind, len))
    }
}
