//! Lexeme classifier.
//!
//! This module organizes the classifier into small, focused components:
//! - `core` - Classifier struct, priority table and dispatch
//! - `identifier` - Keyword and identifier rules
//! - `string` - String constant rule
//! - `number` - Integer constant rule
//! - `symbol` - Symbol fallback rule
//! - `comment` - Comment markers discarded by the symbol rule

mod comment;
mod core;
mod identifier;
mod number;
mod string;
mod symbol;

pub use self::core::{Classification, Classifier, Discard, Lexeme, Rule, PRIORITY};
