// nmlreader/src/scanner/chars.rs

//! Character classification for namelist tokens.

/// True for characters that may appear in an identifier: ASCII digits,
/// letters, and underscore. Identifiers name namelists and parameters.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True for characters that end an unquoted value token: space, tab,
/// carriage return, form feed, vertical tab, and the comment marker.
pub fn is_value_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0b' | '\x0c' | '!')
}

/// True for the string delimiters recognized inside value tokens.
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}
