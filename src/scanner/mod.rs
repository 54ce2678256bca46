// nmlreader/src/scanner/mod.rs

//! Lexical analysis for namelist input lines.
//!
//! This module implements tokenization for namelist input, split in two:
//! 1. Character classification: word characters, value delimiters, quotes
//! 2. Line tokenizers: identifier and quote-aware value extraction, plus
//!    comment stripping

pub mod chars;
pub mod lexer;

// Re-export the classification predicates and tokenizers
pub use chars::{is_quote, is_value_delimiter, is_word_char};
pub use lexer::{next_value, next_word, strip_comment};
