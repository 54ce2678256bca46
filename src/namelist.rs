// nmlreader/src/namelist.rs

//! In-memory document model for parsed namelist files.
//!
//! A [`Document`] holds namelists in file order; each [`Namelist`] holds
//! its parameters in file order. Duplicate names are retained at both
//! levels and lookups always return the first match, so later duplicates
//! are present but unreachable by name.

/// One parameter assignment: a name and its ordered raw value tokens.
///
/// Value tokens are stored exactly as they appeared in the source,
/// including any surrounding quote characters. The used flag starts false
/// and is set the first time the parameter is looked up through the
/// reader, so an application can detect configuration entries it never
/// consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    used: bool,
    values: Vec<String>,
}

impl Param {
    /// Create a parameter with no values yet.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            used: false,
            values: Vec::new(),
        }
    }

    /// The parameter's name as written in the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value tokens in file order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// True once any value of this parameter has been fetched.
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn push_value(&mut self, token: String) {
        self.values.push(token);
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}

/// A `&name ... /` block: a name and its parameters in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Namelist {
    name: String,
    params: Vec<Param>,
}

impl Namelist {
    /// Create an empty namelist. A block with zero parameters is legal.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// The namelist's name as written after `&`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameters in file order, duplicates included.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of parameters, counting duplicates.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True for an empty block (`&name /`).
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The first parameter with the given name, if any.
    pub fn find(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.params.iter_mut().find(|p| p.name == name)
    }

    pub(crate) fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    pub(crate) fn last_param_mut(&mut self) -> Option<&mut Param> {
        self.params.last_mut()
    }
}

/// All namelists of one file, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    namelists: Vec<Namelist>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The namelists in file order, duplicates included.
    pub fn namelists(&self) -> &[Namelist] {
        &self.namelists
    }

    /// Number of namelists.
    pub fn len(&self) -> usize {
        self.namelists.len()
    }

    /// True when the document holds no namelists.
    pub fn is_empty(&self) -> bool {
        self.namelists.is_empty()
    }

    /// The first namelist with the given name, if any.
    pub fn find(&self, name: &str) -> Option<&Namelist> {
        self.namelists.iter().find(|nl| nl.name == name)
    }

    /// Index of the first namelist with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.namelists.iter().position(|nl| nl.name == name)
    }

    pub(crate) fn namelist_mut(&mut self, index: usize) -> Option<&mut Namelist> {
        self.namelists.get_mut(index)
    }

    pub(crate) fn push_namelist(&mut self, namelist: Namelist) {
        self.namelists.push(namelist);
    }

    pub(crate) fn last_namelist_mut(&mut self) -> Option<&mut Namelist> {
        self.namelists.last_mut()
    }
}
