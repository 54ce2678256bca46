// nmlreader/src/fortran.rs

//! Typed conversions from raw namelist value tokens.
//!
//! Conversions receive tokens exactly as stored in the document, quotes
//! included, and apply the Fortran lexical conventions before delegating
//! to the standard parsers: logical literals compare case-insensitively,
//! numeric tokens have their `D` exponent markers rewritten, character
//! values are unquoted positionally.

use crate::error::{NmlError, Result};

/// Rewrite the Fortran double-precision exponent marker to `e`.
///
/// Every `D` or `d` in the token is replaced, so `1.5D3` parses as
/// `1.5e3`. Tokens without the marker come back unchanged.
pub fn normalize_exponent(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == 'D' || c == 'd' { 'e' } else { c })
        .collect()
}

/// Conversion from a raw value token to a typed value.
pub trait FromFortran: Sized {
    /// Convert `raw`, or report a conversion error naming the target type.
    fn from_fortran(raw: &str) -> Result<Self>;
}

impl FromFortran for bool {
    /// Accepts exactly `.true.` and `.false.`, in any case mix.
    fn from_fortran(raw: &str) -> Result<Self> {
        if raw.eq_ignore_ascii_case(".true.") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case(".false.") {
            Ok(false)
        } else {
            Err(NmlError::conversion(raw, "logical"))
        }
    }
}

impl FromFortran for String {
    /// Strips exactly one leading and one trailing character, assumed to
    /// be the value's quotes. An unquoted token therefore loses its first
    /// and last characters (`hello` becomes `ell`): string values must be
    /// quoted in the file to round-trip. Tokens shorter than three
    /// characters convert to the empty string.
    fn from_fortran(raw: &str) -> Result<Self> {
        let mut inner = raw.chars();
        inner.next();
        inner.next_back();
        Ok(inner.as_str().to_string())
    }
}

macro_rules! impl_from_fortran_numeric {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromFortran for $ty {
                fn from_fortran(raw: &str) -> Result<Self> {
                    normalize_exponent(raw)
                        .parse::<$ty>()
                        .map_err(|_| NmlError::conversion(raw, $name))
                }
            }
        )*
    };
}

impl_from_fortran_numeric! {
    i32 => "integer",
    i64 => "integer",
    u32 => "integer",
    u64 => "integer",
    usize => "integer",
    f32 => "real",
    f64 => "real",
}
