//! jackc-lex - Lexical Analyzer for the Jack Programming Language
//!
//! This crate turns Jack source text, either one file or a directory of
//! files forming a single compilation unit, into an ordered stream of
//! classified tokens for the syntax analyzer.
//!
//! # Example Usage
//!
//! ```no_run
//! use jackc_lex::{Tokenizer, TokenizerConfig};
//!
//! let mut tokenizer = Tokenizer::with_config("Pong/", TokenizerConfig::default())?;
//! for token in &mut tokenizer {
//!     let token = token?;
//!     println!("{}\t{}", token.line, token.kind);
//! }
//!
//! for file in tokenizer.files() {
//!     println!("{}: {} tokens", file.name, file.token_count);
//! }
//! # Ok::<(), jackc_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`source`] - Source queue and open files
//! - [`cursor`] - Line cursor
//! - [`lexer`] - Priority-ordered lexeme classifier
//! - [`tokenizer`] - Driver state machine
//! - [`config`] - Tokenizer policies
//! - [`unicode`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `constructor`, `function`, `method`, `field`, `static`, `var`,
//! `int`, `char`, `boolean`, `void`, `true`, `false`, `null`, `this`, `let`,
//! `do`, `if`, `else`, `while`, `return`
//!
//! ## Identifiers
//!
//! `[A-Za-z_][A-Za-z0-9_]*` by default, or `[A-Za-z]+` under
//! [`IdentifierRule::Alphabetic`].
//!
//! ## Constants
//!
//! - **String**: `"hello world"` (quotes stripped, no escapes, one line)
//! - **Integer**: `32767` (decimal digits, not range checked)
//!
//! ## Symbols
//!
//! `{ } ( ) [ ] . , ; + - * / & | < > = ~`, plus any other single
//! non-whitespace character.
//!
//! ## Comments
//!
//! `// ...`, `/* ... */` and `/** ... */`, anywhere on a line; block
//! comments may span lines.
//!
//! # Classification Order
//!
//! At each position the classifier tries keyword, identifier, string
//! constant, integer constant and symbol, in that order, and takes the first
//! match. The symbol rule accepts any non-whitespace character, so every
//! step consumes input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;
pub mod tokenizer;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::{IdentifierRule, LineNumbering, TokenizerConfig};
pub use cursor::LineCursor;
pub use error::{LexError, Result};
pub use source::{SourceFile, SourceQueue};
pub use token::{keyword_from_ident, Keyword, Token, TokenCategory, TokenKind};
pub use tokenizer::{DriverState, FileProvenance, Tokenizer};
