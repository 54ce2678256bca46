// nmlreader/src/lib.rs

//! A Rust-native reader for Fortran-style namelist configuration files.
//!
//! This library provides functionality to:
//! - Parse `&name ... /` namelist blocks into an ordered document model
//! - Fetch typed scalar and array-indexed values with per-call defaults
//! - Enforce a required/optional policy chosen by the reading application
//! - Track which parameters the application actually consulted
//! - Handle Fortran lexical conventions: `.true.`/`.false.` logicals,
//!   `D` exponent markers, quoted strings, `!` comments
//!
//! # Examples
//!
//! ```
//! use nmlreader::NamelistReader;
//!
//! fn main() -> Result<(), nmlreader::NmlError> {
//!     let text = "
//!         &setup
//!             steps = 100
//!             dt = 2.5d-3
//!             restart = .false.
//!             title = 'spin up'
//!         /";
//!     let mut reader = NamelistReader::parse(text)?;
//!     reader.select_namelist("setup")?;
//!     reader.begin_required();
//!     let steps: i32 = reader.get("steps", 0)?;
//!     let dt: f64 = reader.get("dt", 0.0)?;
//!     let title: String = reader.get("title", String::new())?;
//!     assert_eq!(steps, 100);
//!     assert_eq!(dt, 2.5e-3);
//!     assert_eq!(title, "spin up");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fortran;
pub mod namelist;
pub mod parser;
pub mod reader;
pub mod scanner;

use std::path::Path;

pub use error::{NmlError, Result, Severity};
pub use fortran::{normalize_exponent, FromFortran};
pub use namelist::{Document, Namelist, Param};
pub use parser::Parser;
pub use reader::{NamelistReader, Requirement};

/// Parse a namelist document from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), nmlreader::NmlError> {
///     let document = nmlreader::read("run.nml")?;
///     println!("{:#?}", document);
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let contents = fs_err::read_to_string(path)?;
    Parser::with_source(path.to_string_lossy()).parse(&contents)
}

/// Parse a namelist document from a string.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), nmlreader::NmlError> {
///     let document = nmlreader::reads("&grid nx = 64 /")?;
///     assert_eq!(document.len(), 1);
///     Ok(())
/// }
/// ```
pub fn reads(content: &str) -> Result<Document> {
    Parser::new().parse(content)
}
