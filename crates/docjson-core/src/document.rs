//! The public facade: a document owning one root value.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::parser::{ParseConfig, Parser};
use crate::printer::{PrintConfig, Pretty};
use crate::value::Value;

/// A complete document. Two documents are equal when their roots are.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse one value from `input` with the default [`ParseConfig`].
    ///
    /// Whitespace before the value is skipped; anything after it is left
    /// unread in `input`. Pass `&mut reader` to keep using the reader
    /// afterwards.
    pub fn parse<R: BufRead>(input: R) -> Result<Self> {
        Self::parse_with(input, &ParseConfig::default())
    }

    pub fn parse_with<R: BufRead>(input: R, config: &ParseConfig) -> Result<Self> {
        Parser::with_config(input, *config).parse().map(Self::new)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// Write the canonical form of the root to `out` with the default
    /// [`PrintConfig`].
    pub fn print<W: Write>(&self, out: W) -> io::Result<()> {
        self.print_with(out, &PrintConfig::default())
    }

    pub fn print_with<W: Write>(&self, mut out: W, config: &PrintConfig) -> io::Result<()> {
        write!(out, "{}", Pretty::new(&self.root, *config))
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
