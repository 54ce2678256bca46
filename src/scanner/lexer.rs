// nmlreader/src/scanner/lexer.rs

//! Line-level tokenizers for namelist input.
//!
//! The parser scans each line character by character and calls into these
//! helpers to consume multi-character tokens. Neither tokenizer skips
//! leading whitespace: the caller positions `start` on the first candidate
//! character and advances its cursor by the token's length.

use super::chars::{is_quote, is_value_delimiter, is_word_char};

/// Extract the identifier starting at `start`.
///
/// Consumes word characters only; returns an empty string when the
/// character at `start` is not a word character.
pub fn next_word(chars: &[char], start: usize) -> String {
    chars
        .iter()
        .skip(start)
        .take_while(|c| is_word_char(**c))
        .collect()
}

/// Extract the value token starting at `start`.
///
/// Quote characters toggle quote state and are retained in the returned
/// token. Inside a quoted span only the matching quote character is
/// special; a quote of the other kind is consumed literally. Outside any
/// quote the token ends at the first blank or comment marker, which is not
/// consumed. An unterminated quote runs to the end of the line. An empty
/// result means no token starts at `start`.
pub fn next_value(chars: &[char], start: usize) -> String {
    let mut token = String::new();
    let mut quote: Option<char> = None;
    for &c in chars.iter().skip(start) {
        match quote {
            Some(q) => {
                token.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if is_quote(c) => {
                quote = Some(c);
                token.push(c);
            }
            None if is_value_delimiter(c) => break,
            None => token.push(c),
        }
    }
    token
}

/// Truncate `line` at the first `!` outside any quoted span.
///
/// Run once per line before scanning, so the state machine never sees
/// comment text: bare comment lines become empty and a trailing comment
/// ends the value list, while a `!` inside quotes stays part of its value.
pub fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (idx, c) in line.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None if is_quote(c) => quote = Some(c),
            None if c == '!' => return &line[..idx],
            None => {}
        }
    }
    line
}
