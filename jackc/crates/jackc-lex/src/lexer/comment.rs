//! Comment markers.
//!
//! Comments begin with `/`, which is also a Jack symbol, so they are
//! recognized as part of the symbol rule and turned into discards:
//!
//! - `// ...` discards the rest of the line.
//! - `/* ... */` discards through the closing marker on the same line.
//! - `/*` (including the `/**` doc form) without a close on the line
//!   discards the rest of the line; the driver then treats following lines
//!   as comment until one contains `*/`.

use super::core::{Classification, Classifier, Discard};
use crate::cursor::{BLOCK_COMMENT_END, LINE_COMMENT};

/// Marker that opens a block comment.
pub const BLOCK_COMMENT_START: &str = "/*";

impl Classifier {
    /// Matches a comment at the front of `text`.
    pub(crate) fn match_comment(&self, text: &str) -> Option<Classification> {
        if text.starts_with(LINE_COMMENT) {
            return Some(Classification::discard(Discard::LineComment, text.len()));
        }

        let body = text.strip_prefix(BLOCK_COMMENT_START)?;
        let matched = match body.find(BLOCK_COMMENT_END) {
            Some(end) => Classification::discard(
                Discard::BlockComment,
                BLOCK_COMMENT_START.len() + end + BLOCK_COMMENT_END.len(),
            ),
            None => Classification::discard(Discard::OpenBlockComment, text.len()),
        };
        Some(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> Option<(Discard, usize)> {
        Classifier::default()
            .match_comment(text)
            .map(|result| match result.lexeme {
                crate::lexer::Lexeme::Discard(discard) => (discard, result.len),
                other => panic!("Expected discard, got {other:?}"),
            })
    }

    #[test]
    fn test_line_comment_takes_rest_of_line() {
        assert_eq!(comment("// the end"), Some((Discard::LineComment, 10)));
    }

    #[test]
    fn test_closed_block_comment() {
        assert_eq!(comment("/* a */ x"), Some((Discard::BlockComment, 7)));
        assert_eq!(comment("/**/x"), Some((Discard::BlockComment, 4)));
    }

    #[test]
    fn test_open_block_comment() {
        assert_eq!(comment("/** Docs"), Some((Discard::OpenBlockComment, 8)));
        // The `*` of the opener cannot also close the comment.
        assert_eq!(comment("/*/"), Some((Discard::OpenBlockComment, 3)));
    }

    #[test]
    fn test_division_is_not_comment() {
        assert_eq!(comment("/ 2"), None);
        assert_eq!(comment("/"), None);
    }
}
