//! String constant rule.
//!
//! A string constant runs from a double quote to the next double quote on
//! the same line. There are no escape sequences. A quote with no partner on
//! the line does not match here and is left to the symbol fallback.

use super::core::{Classification, Classifier, Rule};
use crate::token::TokenKind;

const QUOTE: char = '"';

impl Classifier {
    /// Matches a double-quoted string at the front of `text`.
    pub(crate) fn match_string(&self, text: &str) -> Option<Classification> {
        let body = text.strip_prefix(QUOTE)?;
        let end = body.find(QUOTE)?;
        let kind = TokenKind::StringConstant(body[..end].to_string());
        Some(Classification::token(Rule::StringConstant, kind, end + 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_string(text: &str) -> Option<(TokenKind, usize)> {
        Classifier::default()
            .match_string(text)
            .map(|result| match result.lexeme {
                crate::lexer::Lexeme::Token(kind) => (kind, result.len),
                other => panic!("Expected token, got {other:?}"),
            })
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(
            lex_string("\"hello world\";"),
            Some((TokenKind::StringConstant("hello world".to_string()), 13))
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            lex_string("\"\""),
            Some((TokenKind::StringConstant(String::new()), 2))
        );
    }

    #[test]
    fn test_string_keeps_inner_whitespace_and_keywords() {
        assert_eq!(
            lex_string("\"  let  x  \")"),
            Some((TokenKind::StringConstant("  let  x  ".to_string()), 12))
        );
    }

    #[test]
    fn test_no_escape_processing() {
        assert_eq!(
            lex_string(r#""a\n" "b""#),
            Some((TokenKind::StringConstant(r"a\n".to_string()), 5))
        );
    }

    #[test]
    fn test_string_ends_at_first_closing_quote() {
        assert_eq!(
            lex_string("\"a\" + \"b\""),
            Some((TokenKind::StringConstant("a".to_string()), 3))
        );
    }

    #[test]
    fn test_unterminated_string_does_not_match() {
        assert_eq!(lex_string("\"never closed"), None);
    }

    #[test]
    fn test_not_at_front_does_not_match() {
        assert_eq!(lex_string("x \"a\""), None);
    }

    #[test]
    fn test_comment_markers_inside_string() {
        assert_eq!(
            lex_string("\"http://x /* y */\""),
            Some((TokenKind::StringConstant("http://x /* y */".to_string()), 18))
        );
    }
}
