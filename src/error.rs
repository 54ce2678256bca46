// nmlreader/src/error.rs

//! Error types for the namelist reader.

use std::io;

use thiserror::Error;

/// Result type alias for namelist operations.
pub type Result<T> = std::result::Result<T, NmlError>;

/// Errors that can occur while loading or querying Fortran namelists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NmlError {
    /// I/O error when reading a namelist file
    #[error("I/O error: {0}")]
    Io(String),

    /// Structural parse error with source label and line number
    #[error("parse failure reading {file} at line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// A namelist requested by name is not present in the document
    #[error("namelist '{namelist}' not found in the file")]
    NamelistNotFound { namelist: String },

    /// A typed get was issued before any namelist was selected
    #[error("no namelist selected: call select_namelist() before get()")]
    NoSelection,

    /// A required parameter is missing from the selected namelist
    #[error("required parameter '{param}' not found in namelist '{namelist}'")]
    ParamNotFound { param: String, namelist: String },

    /// A value index is out of range for the parameter's value list
    #[error("parameter '{param}' in namelist '{namelist}' didn't have enough values: index {index}, count {count}")]
    ValueIndex {
        param: String,
        namelist: String,
        index: usize,
        count: usize,
    },

    /// A raw value token could not be converted to the requested type
    #[error("couldn't parse '{value}' as {target}")]
    Conversion { value: String, target: &'static str },
}

/// Severity of an error, from advisory to contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation has a well-defined fallback
    Warning,
    /// The operation failed but the caller can recover
    Error,
    /// The access contract was violated
    Fatal,
}

impl NmlError {
    /// Construct a structural parse error.
    pub fn parse<F, M>(file: F, line: usize, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        NmlError::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Construct a conversion error for a raw token and a target type name.
    pub fn conversion<V: Into<String>>(value: V, target: &'static str) -> Self {
        NmlError::Conversion {
            value: value.into(),
            target,
        }
    }

    /// Classify this error's severity.
    ///
    /// `Fatal` marks violations of the access contract: reading before
    /// selecting a namelist, a missing required parameter, or an
    /// out-of-range value index. `Warning` marks lookup misses that have a
    /// defined fallback. Everything else is `Error`.
    pub fn severity(&self) -> Severity {
        match self {
            NmlError::NamelistNotFound { .. } => Severity::Warning,
            NmlError::NoSelection
            | NmlError::ParamNotFound { .. }
            | NmlError::ValueIndex { .. } => Severity::Fatal,
            NmlError::Io(_) | NmlError::Parse { .. } | NmlError::Conversion { .. } => {
                Severity::Error
            }
        }
    }
}

impl From<io::Error> for NmlError {
    fn from(err: io::Error) -> Self {
        NmlError::Io(err.to_string())
    }
}
