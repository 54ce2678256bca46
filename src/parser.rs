// nmlreader/src/parser.rs

//! Line-driven parser that turns namelist text into a [`Document`].

use log::{debug, trace};

use crate::error::{NmlError, Result};
use crate::namelist::{Document, Namelist, Param};
use crate::scanner::{next_value, next_word, strip_comment};

/// What the state machine expects to see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Outside any block, seeking `&`
    Ampersand,
    /// After `&`, seeking the namelist identifier
    NamelistName,
    /// Inside a block, seeking a parameter name or the closing `/`
    ParamNameOrEnd,
    /// After a parameter name, seeking `=`
    Equals,
    /// After `=`, at least one value is mandatory
    Value,
    /// After a value; more values or end of line both acceptable
    ValueOrEol,
}

/// Parser over namelist input lines.
///
/// Lines are fed one at a time and blocks may span any number of lines.
/// Parsing stops at the first structural error; everything accumulated
/// before it stays available through [`Parser::into_document`].
///
/// # Examples
///
/// ```
/// use nmlreader::Parser;
///
/// fn main() -> Result<(), nmlreader::NmlError> {
///     let mut parser = Parser::new();
///     parser.feed_line("&core")?;
///     parser.feed_line("nx = 128")?;
///     parser.feed_line("/")?;
///     let document = parser.finish()?;
///     assert_eq!(document.len(), 1);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Parser {
    source: String,
    expect: Expect,
    line_no: usize,
    document: Document,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default `<input>` source label.
    pub fn new() -> Self {
        Self::with_source("<input>")
    }

    /// Create a parser whose errors name `source`, usually a file path.
    pub fn with_source<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
            expect: Expect::Ampersand,
            line_no: 0,
            document: Document::new(),
        }
    }

    /// Parse `content` to completion.
    pub fn parse(mut self, content: &str) -> Result<Document> {
        for line in content.lines() {
            self.feed_line(line)?;
        }
        self.finish()
    }

    /// Process one input line.
    ///
    /// Returns a structural parse error when the line violates the block
    /// grammar; the document keeps whatever was accumulated before the
    /// error.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_no += 1;
        let line = strip_comment(raw.trim());
        let chars: Vec<char> = line.chars().collect();

        let mut i = 0;
        while i < chars.len() {
            match self.expect {
                Expect::Ampersand => {
                    if chars[i] == '&' {
                        self.expect = Expect::NamelistName;
                    }
                }
                Expect::NamelistName => {
                    let word = next_word(&chars, i);
                    if !word.is_empty() {
                        i += word.chars().count() - 1;
                        debug!("found namelist '{}'", word);
                        self.document.push_namelist(Namelist::new(word));
                        self.expect = Expect::ParamNameOrEnd;
                    }
                }
                Expect::ParamNameOrEnd => {
                    if chars[i] == '/' {
                        self.expect = Expect::Ampersand;
                    } else {
                        let word = next_word(&chars, i);
                        if !word.is_empty() {
                            i += word.chars().count() - 1;
                            trace!("found parameter '{}'", word);
                            if let Some(nl) = self.document.last_namelist_mut() {
                                nl.push_param(Param::new(word));
                            }
                            self.expect = Expect::Equals;
                        }
                    }
                }
                Expect::Equals => {
                    if chars[i] == '=' {
                        self.expect = Expect::Value;
                    }
                }
                Expect::Value | Expect::ValueOrEol => {
                    let token = next_value(&chars, i);
                    if token.is_empty() {
                        // delimiter under the cursor
                    } else if token == "/" && self.expect == Expect::ValueOrEol {
                        self.expect = Expect::Ampersand;
                    } else {
                        i += token.chars().count() - 1;
                        trace!("found value '{}'", token);
                        if let Some(param) = self
                            .document
                            .last_namelist_mut()
                            .and_then(|nl| nl.last_param_mut())
                        {
                            param.push_value(token);
                        }
                        self.expect = Expect::ValueOrEol;
                    }
                }
            }
            i += 1;
        }

        match self.expect {
            Expect::NamelistName => Err(self.fail("failed to find namelist name")),
            Expect::Equals => Err(self.fail("expected parameter assignment")),
            Expect::Value => Err(self.fail("couldn't parse value assignment")),
            Expect::ValueOrEol => {
                self.expect = Expect::ParamNameOrEnd;
                Ok(())
            }
            Expect::Ampersand | Expect::ParamNameOrEnd => Ok(()),
        }
    }

    /// True once every opened block has been closed by `/`.
    pub fn is_complete(&self) -> bool {
        self.expect == Expect::Ampersand
    }

    /// Finish parsing, rejecting input that ended inside an open block.
    pub fn finish(self) -> Result<Document> {
        if self.is_complete() {
            return Ok(self.document);
        }
        let message = match self.document.namelists().last() {
            Some(nl) => format!("unterminated namelist '{}'", nl.name()),
            None => "unterminated namelist".to_string(),
        };
        Err(NmlError::parse(self.source, self.line_no, message))
    }

    /// Extract whatever was accumulated, ignoring an unterminated block.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn fail(&self, message: &str) -> NmlError {
        NmlError::parse(self.source.clone(), self.line_no, message)
    }
}
