//! Line cursor for traversing source one line at a time.
//!
//! This module provides the [`LineCursor`] struct, which holds the unconsumed
//! remainder of the line currently being scanned together with the line
//! counter. Lines are normalized when loaded: surrounding whitespace is
//! trimmed, and lines that are blank, start with a line comment, or sit
//! inside a block comment are rejected so the driver can move on.

use crate::config::LineNumbering;
use crate::unicode::leading_whitespace_len;

/// Marker that starts a line comment.
pub const LINE_COMMENT: &str = "//";

/// Marker that closes a block comment.
pub const BLOCK_COMMENT_END: &str = "*/";

/// A cursor over the current line of source text.
///
/// The cursor owns its line buffer and advances through it by byte length
/// from the front, never by searching for lexeme text.
///
/// # Example
///
/// ```
/// use jackc_lex::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new();
/// assert!(cursor.load_line("   let x = 1;  \n"));
/// assert_eq!(cursor.remaining(), "let x = 1;");
/// assert_eq!(cursor.line(), 1);
///
/// cursor.advance_bytes(3);
/// cursor.skip_whitespace();
/// assert_eq!(cursor.remaining(), "x = 1;");
/// ```
#[derive(Debug, Default)]
pub struct LineCursor {
    /// Normalized text of the current line.
    buffer: String,

    /// Current byte position in `buffer`.
    position: usize,

    /// Current line number (1-based once a line has been loaded).
    line: u32,

    /// Whether an unterminated `/*` was seen on an earlier line.
    in_block_comment: bool,
}

impl LineCursor {
    /// Creates a cursor with an empty buffer and the line counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares the cursor for a newly opened file.
    ///
    /// Clears any leftover buffer and block-comment state. The line counter is
    /// only reset under [`LineNumbering::PerFile`].
    ///
    /// Returns true if a block comment was still open, i.e. the previous file
    /// ended inside an unterminated comment.
    pub fn begin_file(&mut self, numbering: LineNumbering) -> bool {
        if numbering == LineNumbering::PerFile {
            self.line = 0;
        }
        self.clear();
        std::mem::take(&mut self.in_block_comment)
    }

    /// Loads the next physical line of the active file.
    ///
    /// The line counter advances whether or not the line holds anything to
    /// scan. Returns true if the normalized line is non-empty; blank lines,
    /// lines starting with `//`, and lines wholly inside a block comment
    /// return false and leave the buffer empty.
    ///
    /// # Example
    ///
    /// ```
    /// use jackc_lex::cursor::LineCursor;
    ///
    /// let mut cursor = LineCursor::new();
    /// assert!(!cursor.load_line("   \t"));
    /// assert!(!cursor.load_line("// comment"));
    /// assert!(cursor.load_line("return;"));
    /// assert_eq!(cursor.line(), 3);
    /// ```
    pub fn load_line(&mut self, raw: &str) -> bool {
        self.line += 1;
        self.clear();

        let mut text = raw.trim();
        if self.in_block_comment {
            match text.find(BLOCK_COMMENT_END) {
                Some(end) => {
                    self.in_block_comment = false;
                    text = text[end + BLOCK_COMMENT_END.len()..].trim_start();
                }
                None => return false,
            }
        }

        if text.is_empty() || text.starts_with(LINE_COMMENT) {
            return false;
        }

        self.buffer.push_str(text);
        true
    }

    /// Returns the unconsumed part of the current line.
    pub fn remaining(&self) -> &str {
        &self.buffer[self.position..]
    }

    /// Returns true if the current line is fully consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Advances past `count` bytes of the buffer.
    ///
    /// `count` is clamped to the remaining length. Callers pass lengths of
    /// lexemes matched at the front of [`remaining`](Self::remaining), which
    /// always end on a character boundary.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let remaining = self.buffer.len() - self.position;
        self.position += count.min(remaining);
    }

    /// Skips whitespace at the front of the buffer.
    pub fn skip_whitespace(&mut self) {
        let len = leading_whitespace_len(self.remaining());
        self.position += len;
    }

    /// Marks the rest of the source, up to the next `*/`, as comment.
    pub fn enter_block_comment(&mut self) {
        self.in_block_comment = true;
    }

    /// Returns true if scanning is inside an unterminated block comment.
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Returns the current line number.
    ///
    /// Zero until the first line is loaded.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position within the line buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Discards the rest of the current line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.position = 0;
    }
}
