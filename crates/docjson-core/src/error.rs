//! Error types for document parsing and value access.
//!
//! The two kinds never mix: [`ParseError`] means the input text was malformed,
//! [`TypeMismatch`] means a caller asked a well-formed [`Value`](crate::Value)
//! for a variant it does not hold.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::value::ValueKind;

/// A grammar or lexical violation, located at the byte where it was detected.
#[derive(Error, Debug)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// 1-based line of the offending byte.
    pub line: usize,
    /// 1-based byte column of the offending byte within its line.
    pub column: usize,
}

/// The cause of a [`ParseError`].
#[derive(Error, Debug)]
pub enum ParseErrorKind {
    /// A structural token appeared where the grammar does not allow it.
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: Found,
    },

    /// `null`, `true` or `false` was misspelled or cut short.
    #[error("invalid literal, expected `{0}`")]
    InvalidLiteral(&'static str),

    /// A backslash followed by anything other than `n`, `t`, `r`, `"` or `\`.
    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),

    /// A raw line feed or carriage return inside a string literal.
    #[error("line break inside string literal")]
    UnterminatedLine,

    /// The input ended before the closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A malformed numeric literal; carries the text read so far.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("string literal is not valid UTF-8")]
    InvalidUtf8,

    /// Containers nested deeper than the configured limit.
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What the parser actually saw when a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "`{}`", c.escape_debug()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A value accessor was called on the wrong variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value is {found}, not {expected}")]
pub struct TypeMismatch {
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// Convenience alias for parse results.
pub type Result<T> = std::result::Result<T, ParseError>;
