//! Recursive-descent parser over a byte stream.
//!
//! The parser reads from any [`BufRead`] with exactly one byte of lookahead
//! (`fill_buf` to peek, `consume(1)` to advance) and never rewinds. Nothing
//! past the closing byte of the top-level value is consumed, so trailing
//! content is left in the reader for the caller.
//!
//! # Grammar
//!
//! ```text
//! value   := object | array | string | number | "true" | "false" | "null"
//! object  := "{" [ member ("," member)* ] "}"
//! member  := string ":" value
//! array   := "[" [ value ("," value)* ] "]"
//! string  := '"' char* '"'      ; no raw CR/LF; escapes \n \t \r \" \\ only
//! number  := "-"? ("0" | digit+) ("." digit+)? (("e"|"E") ("+"|"-")? digit+)?
//! ```
//!
//! Array and object bodies are scanned by a loop that keeps the kind of the
//! last accepted token in an explicit [`Lexeme`] variable; every incoming
//! token is checked against it before being consumed.

use std::io::{self, BufRead};

use crate::error::{Found, ParseError, ParseErrorKind, Result};
use crate::value::{Array, Object, Value};

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of arrays/objects that may enclose one another.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Kind of the last token accepted inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Nothing,
    Key,
    Colon,
    Value,
    Comma,
}

impl Lexeme {
    /// What may legally follow `self` inside an array.
    fn array_expectation(self) -> &'static str {
        match self {
            Lexeme::Nothing => "value or `]`",
            Lexeme::Value => "`,` or `]`",
            // Key and Colon never occur in arrays.
            Lexeme::Comma | Lexeme::Key | Lexeme::Colon => "value after `,`",
        }
    }

    /// What may legally follow `self` inside an object.
    fn object_expectation(self) -> &'static str {
        match self {
            Lexeme::Nothing => "string key or `}`",
            Lexeme::Key => "`:` after key",
            Lexeme::Colon => "value after `:`",
            Lexeme::Value => "`,` or `}`",
            Lexeme::Comma => "string key after `,`",
        }
    }
}

/// Single-pass parser producing one [`Value`] per call to [`Parser::parse`].
pub struct Parser<R> {
    input: R,
    config: ParseConfig,
    line: usize,
    column: usize,
    depth: usize,
}

impl<R: BufRead> Parser<R> {
    pub fn new(input: R) -> Self {
        Self::with_config(input, ParseConfig::default())
    }

    pub fn with_config(input: R, config: ParseConfig) -> Self {
        Self {
            input,
            config,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    /// Read exactly one value, skipping the whitespace before it.
    ///
    /// Bytes after the value's last byte are not read.
    pub fn parse(&mut self) -> Result<Value> {
        self.parse_value()
    }

    /// Give back the reader, positioned right after the last parsed value.
    pub fn into_inner(self) -> R {
        self.input
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.skip_whitespace()? {
            Some(b'[') => self.nested(Self::parse_array),
            Some(b'{') => self.nested(Self::parse_object),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(_) => self.parse_number(),
            None => Err(self.unexpected("value", None)),
        }
    }

    /// Run a container production one nesting level deeper.
    fn nested(&mut self, production: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(ParseErrorKind::DepthLimitExceeded(self.config.max_depth)));
        }
        self.depth += 1;
        let value = production(self);
        self.depth -= 1;
        value
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect(b'[', "`[`")?;

        let mut items = Array::new();
        let mut last = Lexeme::Nothing;

        loop {
            let next = self.skip_whitespace()?;
            match (next, last) {
                (Some(b']'), Lexeme::Nothing | Lexeme::Value) => {
                    self.bump()?;
                    return Ok(Value::Array(items));
                }
                (Some(b','), Lexeme::Value) => {
                    self.bump()?;
                    last = Lexeme::Comma;
                }
                (Some(b']' | b','), _) | (None, _) => {
                    return Err(self.unexpected(last.array_expectation(), next));
                }
                (Some(_), Lexeme::Nothing | Lexeme::Comma) => {
                    items.push(self.parse_value()?);
                    last = Lexeme::Value;
                }
                (Some(_), _) => {
                    return Err(self.unexpected(last.array_expectation(), next));
                }
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect(b'{', "`{`")?;

        let mut members = Object::new();
        let mut key = String::new();
        let mut last = Lexeme::Nothing;

        loop {
            let next = self.skip_whitespace()?;
            match (next, last) {
                (Some(b'}'), Lexeme::Nothing | Lexeme::Value) => {
                    self.bump()?;
                    return Ok(Value::Object(members));
                }
                (Some(b','), Lexeme::Value) => {
                    self.bump()?;
                    last = Lexeme::Comma;
                }
                (Some(b':'), Lexeme::Key) => {
                    self.bump()?;
                    last = Lexeme::Colon;
                }
                (Some(b'"'), Lexeme::Nothing | Lexeme::Comma) => {
                    key = self.parse_string()?;
                    last = Lexeme::Key;
                }
                (Some(b'}' | b',' | b':'), _) | (None, _) => {
                    return Err(self.unexpected(last.object_expectation(), next));
                }
                (Some(_), Lexeme::Colon) => {
                    let value = self.parse_value()?;
                    // Last write wins for repeated keys.
                    members.insert(std::mem::take(&mut key), value);
                    last = Lexeme::Value;
                }
                (Some(_), _) => {
                    return Err(self.unexpected(last.object_expectation(), next));
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let start = self.position();
        self.expect(b'"', "`\"`")?;

        let mut bytes = Vec::new();
        loop {
            let at = self.position();
            match self.bump()? {
                None => return Err(self.error_at(ParseErrorKind::UnterminatedString, start)),
                Some(b'"') => break,
                Some(b'\\') => {
                    let decoded = match self.bump()? {
                        None => {
                            return Err(self.error_at(ParseErrorKind::UnterminatedString, start))
                        }
                        Some(b'n') => b'\n',
                        Some(b't') => b'\t',
                        Some(b'r') => b'\r',
                        Some(b'"') => b'"',
                        Some(b'\\') => b'\\',
                        Some(other) => {
                            return Err(
                                self.error_at(ParseErrorKind::UnknownEscape(display_char(other)), at)
                            )
                        }
                    };
                    bytes.push(decoded);
                }
                Some(b'\n' | b'\r') => {
                    return Err(self.error_at(ParseErrorKind::UnterminatedLine, at));
                }
                Some(b) => bytes.push(b),
            }
        }

        String::from_utf8(bytes).map_err(|_| self.error_at(ParseErrorKind::InvalidUtf8, start))
    }

    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        let start = self.position();
        for expected in literal.bytes() {
            if self.bump()? != Some(expected) {
                return Err(self.error_at(ParseErrorKind::InvalidLiteral(literal), start));
            }
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.position();
        let mut literal = String::new();

        if self.peek()? == Some(b'-') {
            self.push_byte(&mut literal)?;
        }

        if self.peek()? == Some(b'0') {
            self.push_byte(&mut literal)?;
            if matches!(self.peek()?, Some(b) if b.is_ascii_digit()) {
                self.push_byte(&mut literal)?;
                return Err(self.error_at(ParseErrorKind::InvalidNumber(literal), start));
            }
        } else {
            self.read_digits(&mut literal, start)?;
        }

        let mut integral = true;

        if self.peek()? == Some(b'.') {
            self.push_byte(&mut literal)?;
            self.read_digits(&mut literal, start)?;
            integral = false;
        }

        if matches!(self.peek()?, Some(b'e' | b'E')) {
            self.push_byte(&mut literal)?;
            if matches!(self.peek()?, Some(b'+' | b'-')) {
                self.push_byte(&mut literal)?;
            }
            self.read_digits(&mut literal, start)?;
            integral = false;
        }

        if integral {
            // Out-of-range integers fall through to f64.
            if let Ok(n) = literal.parse::<i32>() {
                return Ok(Value::Integer(n));
            }
        }

        match literal.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(self.error_at(ParseErrorKind::InvalidNumber(literal), start)),
        }
    }

    /// Append one or more ASCII digits to `literal`.
    fn read_digits(&mut self, literal: &mut String, start: (usize, usize)) -> Result<()> {
        match self.peek()? {
            Some(b) if b.is_ascii_digit() => {}
            found => {
                if let Some(b) = found {
                    literal.push(display_char(b));
                }
                let literal = std::mem::take(literal);
                return Err(self.error_at(ParseErrorKind::InvalidNumber(literal), start));
            }
        }
        while matches!(self.peek()?, Some(b) if b.is_ascii_digit()) {
            self.push_byte(literal)?;
        }
        Ok(())
    }

    fn push_byte(&mut self, literal: &mut String) -> Result<()> {
        if let Some(b) = self.bump()? {
            literal.push(char::from(b));
        }
        Ok(())
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<()> {
        match self.peek()? {
            Some(b) if b == byte => {
                self.bump()?;
                Ok(())
            }
            found => Err(self.unexpected(expected, found)),
        }
    }

    /// Peek the first byte that is not insignificant whitespace.
    fn skip_whitespace(&mut self) -> Result<Option<u8>> {
        while let Some(b) = self.peek()? {
            if !matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                return Ok(Some(b));
            }
            self.bump()?;
        }
        Ok(None)
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        loop {
            let next = self.input.fill_buf().map(|buf| buf.first().copied());
            match next {
                Ok(b) => return Ok(b),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(self.error(ParseErrorKind::Io(e))),
            }
        }
    }

    fn bump(&mut self) -> Result<Option<u8>> {
        let next = self.peek()?;
        if let Some(b) = next {
            self.input.consume(1);
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        Ok(next)
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn unexpected(&self, expected: &'static str, found: Option<u8>) -> ParseError {
        let found = match found {
            Some(b) => Found::Char(display_char(b)),
            None => Found::EndOfInput,
        };
        self.error(ParseErrorKind::Unexpected { expected, found })
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.position())
    }

    fn error_at(&self, kind: ParseErrorKind, (line, column): (usize, usize)) -> ParseError {
        ParseError { kind, line, column }
    }
}

/// Bytes outside ASCII are parts of multi-byte characters; show them as U+FFFD.
fn display_char(b: u8) -> char {
    if b.is_ascii() {
        char::from(b)
    } else {
        char::REPLACEMENT_CHARACTER
    }
}
