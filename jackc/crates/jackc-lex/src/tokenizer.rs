//! Tokenizer driver.
//!
//! The driver owns everything one tokenization run needs: the source queue,
//! the open file, the line cursor and the growing token stream. It moves
//! through four states:
//!
//! ```text
//!            open next file              read a scannable line
//!   Idle ────────────────────▶ LineEmpty ─────────────────────▶ LineBuffered
//!    │  ▲                         │   ▲                             │
//!    │  └─────── end of file ─────┘   └────── buffer consumed ──────┘
//!    │                                                    (classify one lexeme
//!    ▼ queue empty                                          per step, stay)
//!  Exhausted
//! ```
//!
//! `Exhausted` is terminal. Any error closes the open file, moves the driver
//! to `Exhausted` and aborts the run.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use crate::config::TokenizerConfig;
use crate::cursor::LineCursor;
use crate::error::{LexError, Result};
use crate::lexer::{Classifier, Discard, Lexeme};
use crate::source::{SourceFile, SourceQueue};
use crate::token::Token;

/// Where the driver is in the tokenization of a compilation unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// No file open.
    Idle,
    /// A file is open; a new line is needed.
    LineEmpty,
    /// A file is open and the current line still has text to classify.
    LineBuffered,
    /// No files left and no buffered text. Terminal.
    Exhausted,
}

/// Record of one source file's share of the token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileProvenance {
    /// File name without directories.
    pub name: String,
    /// Path the file was opened from.
    pub path: PathBuf,
    /// Index in the token stream of the file's first token.
    pub first_token: usize,
    /// Number of tokens the file produced.
    pub token_count: usize,
}

impl FileProvenance {
    /// Returns the range of token indices produced by this file.
    pub fn token_range(&self) -> std::ops::Range<usize> {
        self.first_token..self.first_token + self.token_count
    }
}

/// Tokenizer for a Jack compilation unit.
///
/// Tokens can be pulled one at a time with [`advance`](Self::advance), as an
/// iterator, or all at once with [`tokenize_all`](Self::tokenize_all). Every
/// emitted token is also appended to the stream returned by
/// [`tokens`](Self::tokens).
///
/// # Example
///
/// ```no_run
/// use jackc_lex::Tokenizer;
///
/// let mut tokenizer = Tokenizer::new("Square/")?;
/// while let Some(token) = tokenizer.advance()? {
///     println!("{} {}", tokenizer.current_file_name(), token);
/// }
/// # Ok::<(), jackc_lex::LexError>(())
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
    classifier: Classifier,
    queue: SourceQueue,

    /// File currently being read. Dropping it closes the handle.
    file: Option<SourceFile>,

    cursor: LineCursor,

    /// Reused buffer for raw lines.
    line_buf: String,

    state: DriverState,
    tokens: Vec<Token>,
    files: Vec<FileProvenance>,

    /// Index into `files` of the file the last token came from.
    last_emitted: Option<usize>,
}

impl Tokenizer {
    /// Creates a tokenizer for `path` with the default configuration.
    ///
    /// `path` may name a single source file or a directory of them.
    ///
    /// # Errors
    ///
    /// [`LexError::SourceNotFound`] if `path` is a directory that cannot be
    /// listed. A missing single file is reported by the first
    /// [`advance`](Self::advance).
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(path, TokenizerConfig::default())
    }

    /// Creates a tokenizer for `path` with an explicit configuration.
    pub fn with_config(path: impl AsRef<Path>, config: TokenizerConfig) -> Result<Self> {
        let queue = SourceQueue::from_path(path.as_ref(), &config.extension)?;
        Ok(Self::with_queue(queue, config))
    }

    /// Creates a tokenizer over an already built source queue.
    pub fn with_queue(queue: SourceQueue, config: TokenizerConfig) -> Self {
        Self {
            classifier: Classifier::new(config.identifiers),
            config,
            queue,
            file: None,
            cursor: LineCursor::new(),
            line_buf: String::new(),
            state: DriverState::Idle,
            tokens: Vec::new(),
            files: Vec::new(),
            last_emitted: None,
        }
    }

    /// Returns true if a further token could still be produced.
    ///
    /// This does not look ahead: the remaining input may hold only blank
    /// lines and comments, in which case the next [`advance`](Self::advance)
    /// returns `Ok(None)`.
    pub fn has_more(&self) -> bool {
        self.state != DriverState::Exhausted
    }

    /// Drives the tokenizer until it produces exactly one new token.
    ///
    /// Returns `Ok(None)` once the compilation unit is exhausted.
    ///
    /// # Errors
    ///
    /// Any error aborts the run: the open file is closed and later calls
    /// return `Ok(None)`.
    pub fn advance(&mut self) -> Result<Option<Token>> {
        let result = self.step();
        if result.is_err() {
            self.abort();
        }
        result
    }

    /// Tokenizes the rest of the compilation unit and returns the full
    /// stream.
    pub fn tokenize_all(&mut self) -> Result<&[Token]> {
        while self.advance()?.is_some() {}
        Ok(&self.tokens)
    }

    /// Returns the tokens emitted so far, in discovery order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the tokenizer and returns the token stream.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Returns the name of the file the most recently emitted token came
    /// from, or an empty string before the first token.
    pub fn current_file_name(&self) -> &str {
        self.last_emitted
            .map(|index| self.files[index].name.as_str())
            .unwrap_or("")
    }

    /// Returns every file opened so far, in open order.
    pub fn files(&self) -> &[FileProvenance] {
        &self.files
    }

    /// Returns the tokens produced by the `index`-th opened file.
    pub fn tokens_of(&self, index: usize) -> Option<&[Token]> {
        self.files
            .get(index)
            .map(|file| &self.tokens[file.token_range()])
    }

    /// Returns the current line number.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current driver state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns the configuration this tokenizer runs with.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    fn step(&mut self) -> Result<Option<Token>> {
        loop {
            match self.state {
                DriverState::Exhausted => return Ok(None),
                DriverState::Idle => self.open_next_file()?,
                DriverState::LineEmpty => self.advance_line()?,
                DriverState::LineBuffered => {
                    if let Some(token) = self.scan_lexeme()? {
                        return Ok(Some(token));
                    }
                },
            }
        }
    }

    /// `Idle → LineEmpty`, or `Idle → Exhausted` when the queue is empty.
    fn open_next_file(&mut self) -> Result<()> {
        let Some(file) = self.queue.open_next()? else {
            self.state = DriverState::Exhausted;
            info!(
                files = self.files.len(),
                tokens = self.tokens.len(),
                "tokenization complete"
            );
            return Ok(());
        };

        if self.cursor.begin_file(self.config.line_numbering) {
            if let Some(previous) = self.files.last() {
                warn!(file = %previous.name, "file ended inside a block comment");
            }
        }
        self.files.push(FileProvenance {
            name: file.name().to_string(),
            path: file.path().to_path_buf(),
            first_token: self.tokens.len(),
            token_count: 0,
        });
        self.file = Some(file);
        self.state = DriverState::LineEmpty;
        Ok(())
    }

    /// `LineEmpty → LineBuffered`, or `LineEmpty → Idle` at end of file.
    ///
    /// Blank, comment-only and block-comment lines are skipped in a loop.
    fn advance_line(&mut self) -> Result<()> {
        loop {
            let Some(file) = self.file.as_mut() else {
                self.state = DriverState::Idle;
                return Ok(());
            };

            let more = match file.read_line(&mut self.line_buf) {
                Ok(more) => more,
                Err(source) => {
                    return Err(LexError::Io {
                        file: file.name().to_string(),
                        line: self.cursor.line() + 1,
                        source,
                    })
                },
            };

            if !more {
                self.close_file();
                self.state = DriverState::Idle;
                return Ok(());
            }

            if self.cursor.load_line(&self.line_buf) {
                self.state = DriverState::LineBuffered;
                return Ok(());
            }
        }
    }

    /// Classifies one lexeme from the line buffer.
    ///
    /// Returns the emitted token, or `None` if the lexeme was discarded or the
    /// buffer turned out to be empty (`LineBuffered → LineEmpty`).
    fn scan_lexeme(&mut self) -> Result<Option<Token>> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            self.state = DriverState::LineEmpty;
            return Ok(None);
        }

        let text = self.cursor.remaining();
        let classified = self.classifier.classify(text).filter(|c| c.len > 0);
        let Some(classified) = classified else {
            return Err(LexError::MalformedLexeme {
                file: self.open_file_name().to_string(),
                line: self.cursor.line(),
                text: text.to_string(),
            });
        };
        self.cursor.advance_bytes(classified.len);

        match classified.lexeme {
            Lexeme::Token(kind) => {
                let token = Token::new(kind, self.cursor.line());
                self.push(token.clone());
                Ok(Some(token))
            },
            Lexeme::Discard(Discard::OpenBlockComment) => {
                debug!(line = self.cursor.line(), "block comment continues past end of line");
                self.cursor.enter_block_comment();
                Ok(None)
            },
            Lexeme::Discard(_) => Ok(None),
        }
    }

    fn push(&mut self, token: Token) {
        trace!(line = token.line, token = %token.kind, "emit");
        if let Some(file) = self.files.last_mut() {
            file.token_count += 1;
            self.last_emitted = Some(self.files.len() - 1);
        }
        self.tokens.push(token);
    }

    fn open_file_name(&self) -> &str {
        self.file.as_ref().map(SourceFile::name).unwrap_or("")
    }

    fn close_file(&mut self) {
        if let Some(file) = self.file.take() {
            debug!(file = %file.name(), line = self.cursor.line(), "closed source file");
        }
        self.cursor.clear();
    }

    fn abort(&mut self) {
        self.close_file();
        self.state = DriverState::Exhausted;
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}

impl FusedIterator for Tokenizer {}
