//! Core classifier implementation.
//!
//! The classifier looks at the front of a line buffer and decides what the
//! next lexeme is. Rules are tried in the order of [`PRIORITY`]; the first
//! rule that matches wins and the others are not consulted.

use crate::config::IdentifierRule;
use crate::token::TokenKind;

/// A classification rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Exact keyword.
    Keyword,
    /// Greedy identifier run.
    Identifier,
    /// Double-quoted string on one line.
    StringConstant,
    /// Greedy run of decimal digits.
    IntegerConstant,
    /// Any single non-whitespace character, or a comment marker.
    Symbol,
}

/// Order in which rules are tried. The last rule always matches a
/// non-whitespace character, so classification of a trimmed, non-empty
/// buffer never fails.
pub const PRIORITY: [Rule; 5] = [
    Rule::Keyword,
    Rule::Identifier,
    Rule::StringConstant,
    Rule::IntegerConstant,
    Rule::Symbol,
];

/// What a classified lexeme turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexeme {
    /// Emit a token.
    Token(TokenKind),
    /// Consume the text without emitting anything.
    Discard(Discard),
}

/// Kinds of discarded text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discard {
    /// `//` to the end of the line.
    LineComment,
    /// `/* ... */` closed on the same line.
    BlockComment,
    /// `/*` with no close on this line. Later lines are comment until `*/`.
    OpenBlockComment,
}

/// Result of classifying the front of a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Rule that matched.
    pub rule: Rule,
    /// What to do with the matched text.
    pub lexeme: Lexeme,
    /// Byte length of the matched text, measured from the front of the buffer.
    pub len: usize,
}

impl Classification {
    pub(crate) fn token(rule: Rule, kind: TokenKind, len: usize) -> Self {
        Self {
            rule,
            lexeme: Lexeme::Token(kind),
            len,
        }
    }

    pub(crate) fn discard(discard: Discard, len: usize) -> Self {
        Self {
            rule: Rule::Symbol,
            lexeme: Lexeme::Discard(discard),
            len,
        }
    }
}

/// Priority-ordered lexeme classifier.
///
/// # Example
///
/// ```
/// use jackc_lex::lexer::{Classifier, Lexeme};
/// use jackc_lex::{IdentifierRule, Keyword, TokenKind};
///
/// let classifier = Classifier::new(IdentifierRule::Alphanumeric);
/// let result = classifier.classify("class Main {").unwrap();
///
/// assert_eq!(result.lexeme, Lexeme::Token(TokenKind::Keyword(Keyword::Class)));
/// assert_eq!(result.len, 5);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Classifier {
    /// Identifier rule shared by the keyword and identifier matchers.
    pub(crate) identifiers: IdentifierRule,
}

impl Classifier {
    /// Creates a classifier using the given identifier rule.
    pub fn new(identifiers: IdentifierRule) -> Self {
        Self { identifiers }
    }

    /// Classifies the lexeme at the front of `text`.
    ///
    /// `text` must have its leading whitespace stripped. Returns `None` only
    /// if `text` is empty or starts with whitespace; otherwise the returned
    /// length is at least one character.
    pub fn classify(&self, text: &str) -> Option<Classification> {
        PRIORITY.iter().find_map(|&rule| self.apply(rule, text))
    }

    /// Tries a single rule against the front of `text`.
    pub fn apply(&self, rule: Rule, text: &str) -> Option<Classification> {
        match rule {
            Rule::Keyword => self.match_keyword(text),
            Rule::Identifier => self.match_identifier(text),
            Rule::StringConstant => self.match_string(text),
            Rule::IntegerConstant => self.match_integer(text),
            Rule::Symbol => self.match_symbol(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;

    fn classify(text: &str) -> Classification {
        Classifier::default().classify(text).unwrap()
    }

    #[test]
    fn test_priority_order_is_fixed() {
        assert_eq!(
            PRIORITY,
            [
                Rule::Keyword,
                Rule::Identifier,
                Rule::StringConstant,
                Rule::IntegerConstant,
                Rule::Symbol,
            ]
        );
    }

    #[test]
    fn test_keyword_beats_identifier() {
        let result = classify("while (x)");
        assert_eq!(result.rule, Rule::Keyword);
        assert_eq!(result.lexeme, Lexeme::Token(TokenKind::Keyword(Keyword::While)));
        assert_eq!(result.len, 5);

        // Both rules would accept the text; only the first is taken.
        let classifier = Classifier::default();
        assert!(classifier.apply(Rule::Identifier, "while").is_some());
    }

    #[test]
    fn test_each_rule_reachable() {
        assert_eq!(classify("Main {").rule, Rule::Identifier);
        assert_eq!(classify("\"hi\" ;").rule, Rule::StringConstant);
        assert_eq!(classify("42)").rule, Rule::IntegerConstant);
        assert_eq!(classify("{").rule, Rule::Symbol);
    }

    #[test]
    fn test_empty_or_untrimmed_input_is_rejected() {
        let classifier = Classifier::default();
        assert!(classifier.classify("").is_none());
        assert!(classifier.classify(" x").is_none());
    }

    #[test]
    fn test_len_never_exceeds_text() {
        for text in ["x", "9", "\"\"", "/", "//", "/*", "/**/", "é", "class", "\"open"] {
            let result = classify(text);
            assert!(result.len > 0, "{text:?}");
            assert!(result.len <= text.len(), "{text:?}");
            assert!(text.is_char_boundary(result.len), "{text:?}");
        }
    }
}
