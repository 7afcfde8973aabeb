//! Token definitions for the Jack lexer.
//!
//! A [`Token`] pairs a classified lexeme ([`TokenKind`]) with the 1-based
//! line it was found on. Tokens never carry a file name; file identity is
//! tracked by the [`Tokenizer`](crate::Tokenizer) through its provenance
//! records.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// The characters the Jack grammar treats as symbols.
pub const JACK_SYMBOLS: &[char] = &[
    '{', '}', '(', ')', '[', ']', '.', ',', ';', '+', '-', '*', '/', '&', '|', '<', '>', '=',
    '~',
];

/// A classified lexeme together with its source line.
///
/// # Example
///
/// ```
/// use jackc_lex::{Keyword, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword(Keyword::Class), 1);
/// assert_eq!(token.lexeme(), "class");
/// assert_eq!(token.line, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The classified lexeme.
    pub kind: TokenKind,

    /// Line number the lexeme was found on (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }

    /// Returns the lexical category of this token.
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Returns the text of the lexeme (string constants without quotes).
    pub fn lexeme(&self) -> Cow<'_, str> {
        self.kind.lexeme()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.kind)
    }
}

/// The payload-carrying lexical variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", content = "lexeme")]
pub enum TokenKind {
    /// A reserved word.
    Keyword(Keyword),

    /// A name that is not a keyword.
    Identifier(String),

    /// The text between a pair of double quotes, quotes stripped.
    StringConstant(String),

    /// A run of decimal digits. Range is not validated here.
    IntegerConstant(String),

    /// A single non-whitespace character.
    Symbol(char),
}

impl TokenKind {
    /// Returns the lexical category of this kind.
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Keyword(_) => TokenCategory::Keyword,
            TokenKind::Identifier(_) => TokenCategory::Identifier,
            TokenKind::StringConstant(_) => TokenCategory::StringConstant,
            TokenKind::IntegerConstant(_) => TokenCategory::IntegerConstant,
            TokenKind::Symbol(_) => TokenCategory::Symbol,
        }
    }

    /// Returns the lexeme text.
    ///
    /// ```
    /// use jackc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::StringConstant("hi there".into()).lexeme(), "hi there");
    /// assert_eq!(TokenKind::Symbol('{').lexeme(), "{");
    /// ```
    pub fn lexeme(&self) -> Cow<'_, str> {
        match self {
            TokenKind::Keyword(kw) => Cow::Borrowed(kw.as_str()),
            TokenKind::Identifier(s)
            | TokenKind::StringConstant(s)
            | TokenKind::IntegerConstant(s) => Cow::Borrowed(s),
            TokenKind::Symbol(c) => Cow::Owned(c.to_string()),
        }
    }

    /// Returns true if this is a symbol from the Jack symbol set.
    ///
    /// The classifier emits any non-whitespace character as a symbol; the
    /// syntax analyzer uses this to reject characters Jack does not define.
    pub fn is_jack_symbol(&self) -> bool {
        matches!(self, TokenKind::Symbol(c) if JACK_SYMBOLS.contains(c))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.category(), self.lexeme())
    }
}

/// The lexical category of a token, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenCategory {
    /// Reserved word.
    Keyword,
    /// Name.
    Identifier,
    /// Quoted string.
    StringConstant,
    /// Decimal digits.
    IntegerConstant,
    /// Single character.
    Symbol,
}

impl TokenCategory {
    /// Returns the category name as used in token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::StringConstant => "stringConstant",
            TokenCategory::IntegerConstant => "integerConstant",
            TokenCategory::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// The closed set of Jack keywords.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Returns the source spelling of the keyword.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// Looks up a keyword by its exact spelling.
            ///
            /// ```
            /// use jackc_lex::Keyword;
            ///
            /// assert_eq!(Keyword::from_ident("while"), Some(Keyword::While));
            /// assert_eq!(Keyword::from_ident("While"), None);
            /// ```
            pub fn from_ident(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    Class => "class",
    Constructor => "constructor",
    Function => "function",
    Method => "method",
    Field => "field",
    Static => "static",
    Var => "var",
    Int => "int",
    Char => "char",
    Boolean => "boolean",
    Void => "void",
    True => "true",
    False => "false",
    Null => "null",
    This => "this",
    Let => "let",
    Do => "do",
    If => "if",
    Else => "else",
    While => "while",
    Return => "return",
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a keyword token for an identifier-shaped lexeme.
///
/// Returns `None` if `text` is not a keyword.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    Keyword::from_ident(text).map(TokenKind::Keyword)
}
