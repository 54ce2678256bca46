// nmlreader/src/reader.rs

//! Typed accessor session over a parsed [`Document`].

use std::path::Path;

use log::{error, warn};

use crate::error::{NmlError, Result};
use crate::fortran::FromFortran;
use crate::namelist::{Document, Namelist};
use crate::parser::Parser;

/// Policy for parameters absent from the selected namelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Absent parameters fall back to the caller-supplied default.
    #[default]
    Optional,
    /// Absent parameters are an error.
    Required,
}

/// Reader over a parsed namelist document.
///
/// A reader holds the document, the currently selected namelist, and the
/// requirement policy applied by [`get`](NamelistReader::get). Selection
/// and policy persist across calls until changed.
///
/// # Examples
///
/// ```
/// use nmlreader::NamelistReader;
///
/// fn main() -> Result<(), nmlreader::NmlError> {
///     let text = "
///         &grid
///             nx = 64
///             ny = 32
///         /";
///     let mut reader = NamelistReader::parse(text)?;
///     reader.select_namelist("grid")?;
///     let nx: i32 = reader.get("nx", 0)?;
///     let nz: i32 = reader.get("nz", 1)?;
///     assert_eq!((nx, nz), (64, 1));
///     assert!(!reader.all_used());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct NamelistReader {
    document: Document,
    selected: Option<usize>,
    requirement: Requirement,
}

impl NamelistReader {
    /// Wrap an already-parsed document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selected: None,
            requirement: Requirement::default(),
        }
    }

    /// Parse `content` and wrap the resulting document.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::new(crate::reads(content)?))
    }

    /// Load and parse the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(crate::read(path)?))
    }

    /// Load the file at `path`, tolerating structural errors.
    ///
    /// A structural parse error is logged and stops parsing; the reader
    /// keeps every namelist accumulated before the error so the caller can
    /// still inspect it. An unterminated trailing block is logged as a
    /// warning and kept. I/O errors are still returned.
    pub fn from_path_lenient<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)?;
        let mut parser = Parser::with_source(path.to_string_lossy());
        let mut aborted = false;
        for line in content.lines() {
            if let Err(err) = parser.feed_line(line) {
                error!("{}", err);
                aborted = true;
                break;
            }
        }
        if !aborted && !parser.is_complete() {
            warn!("unterminated namelist at end of {}", path.display());
        }
        Ok(Self::new(parser.into_document()))
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The currently selected namelist, if any.
    pub fn selected(&self) -> Option<&Namelist> {
        self.selected.and_then(|i| self.document.namelists().get(i))
    }

    /// Treat missing parameters as errors in subsequent `get` calls.
    pub fn begin_required(&mut self) {
        self.requirement = Requirement::Required;
    }

    /// Let missing parameters fall back to their defaults in subsequent
    /// `get` calls.
    pub fn begin_optional(&mut self) {
        self.requirement = Requirement::Optional;
    }

    /// The requirement policy currently in force.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Select the namelist to read from.
    ///
    /// Linear search, first name match wins. On a miss the previous
    /// selection stays in place and [`NmlError::NamelistNotFound`] is
    /// returned.
    pub fn select_namelist(&mut self, name: &str) -> Result<()> {
        match self.document.position(name) {
            Some(index) => {
                self.selected = Some(index);
                Ok(())
            }
            None => Err(NmlError::NamelistNotFound {
                namelist: name.to_string(),
            }),
        }
    }

    /// Fetch the first value of `param` from the selected namelist.
    ///
    /// Equivalent to [`get_at`](NamelistReader::get_at) with index 0.
    pub fn get<T: FromFortran>(&mut self, param: &str, default: T) -> Result<T> {
        self.get_at(param, default, 0)
    }

    /// Fetch the value at `index` of `param` from the selected namelist.
    ///
    /// The first parameter whose name matches exactly is consulted and its
    /// use is recorded, even when `index` then turns out to be out of
    /// range. A missing parameter yields `default` under
    /// [`Requirement::Optional`] and [`NmlError::ParamNotFound`] under
    /// [`Requirement::Required`].
    pub fn get_at<T: FromFortran>(&mut self, param: &str, default: T, index: usize) -> Result<T> {
        let selected = self.selected.ok_or(NmlError::NoSelection)?;
        let namelist = self
            .document
            .namelist_mut(selected)
            .ok_or(NmlError::NoSelection)?;
        let namelist_name = namelist.name().to_string();
        let entry = match namelist.find_mut(param) {
            Some(entry) => entry,
            None => {
                return match self.requirement {
                    Requirement::Optional => Ok(default),
                    Requirement::Required => Err(NmlError::ParamNotFound {
                        param: param.to_string(),
                        namelist: namelist_name,
                    }),
                }
            }
        };
        entry.mark_used();
        let count = entry.values().len();
        match entry.values().get(index) {
            Some(raw) => T::from_fortran(raw),
            None => Err(NmlError::ValueIndex {
                param: param.to_string(),
                namelist: namelist_name,
                index,
                count,
            }),
        }
    }

    /// Every parameter never fetched, paired with its namelist's name.
    pub fn unused_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.document.namelists().iter().flat_map(|nl| {
            nl.params()
                .iter()
                .filter(|p| !p.is_used())
                .map(move |p| (nl.name(), p.name()))
        })
    }

    /// Check that every parameter was fetched at least once.
    ///
    /// Each parameter never consulted is reported through `log::warn!`
    /// with its owning namelist; returns true when there were none.
    pub fn all_used(&self) -> bool {
        let mut all = true;
        for (namelist, param) in self.unused_params() {
            warn!("'{}' was present in '{}' but was not used", param, namelist);
            all = false;
        }
        all
    }
}
