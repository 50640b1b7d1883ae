//! Canonical pretty-printer.
//!
//! Output rules:
//!
//! - Non-empty arrays and objects open on the current line, put one child per
//!   line, and close on their own line with the closing bracket in the same
//!   column as the opening one. Empty containers print as `[]` and `{}`.
//! - Children are indented by `indent_step` columns past the column where
//!   their container's opening line starts *its content*. For an object
//!   member that means past the end of the `"key": ` prefix, so a nested
//!   container lines up under its value rather than under its key.
//! - Object members come out in key order (objects are sorted maps).
//! - Floats always carry a `.` or an exponent so they read back as floats;
//!   non-finite floats print as `null`.
//! - No trailing newline.

use std::fmt::{self, Write};

use crate::value::Value;

/// Default number of columns per nesting level.
pub const DEFAULT_INDENT_STEP: usize = 4;

/// Printer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    pub indent_step: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
        }
    }
}

/// Render `value` into `out` in canonical form.
pub fn write_value<W: Write>(out: &mut W, value: &Value, config: &PrintConfig) -> fmt::Result {
    PrintContext {
        step: config.indent_step,
        indent: 0,
        prefix: "",
        prefix_width: 0,
    }
    .print(out, value)
}

/// [`Display`](fmt::Display) adapter that prints a value with a given config.
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    value: &'a Value,
    config: PrintConfig,
}

impl<'a> Pretty<'a> {
    pub fn new(value: &'a Value, config: PrintConfig) -> Self {
        Self { value, config }
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, &self.config)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &PrintConfig::default())
    }
}

/// Where one value starts: `indent` spaces, then `prefix` (an object key and
/// its `": "`, or nothing).
#[derive(Clone, Copy)]
struct PrintContext<'a> {
    step: usize,
    indent: usize,
    prefix: &'a str,
    prefix_width: usize,
}

impl PrintContext<'_> {
    /// Column of this value's first content character.
    fn content_column(&self) -> usize {
        self.indent + self.prefix_width
    }

    fn element(&self) -> PrintContext<'static> {
        PrintContext {
            step: self.step,
            indent: self.content_column() + self.step,
            prefix: "",
            prefix_width: 0,
        }
    }

    fn member<'k>(&self, prefix: &'k str) -> PrintContext<'k> {
        PrintContext {
            step: self.step,
            indent: self.content_column() + self.step,
            prefix,
            prefix_width: prefix.chars().count(),
        }
    }

    fn print<W: Write>(&self, out: &mut W, value: &Value) -> fmt::Result {
        pad(out, self.indent)?;
        out.write_str(self.prefix)?;

        match value {
            Value::Null => out.write_str("null"),
            Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(out, "{n}"),
            Value::Float(f) => write_float(out, *f),
            Value::String(s) => write_escaped(out, s),
            Value::Array(items) if items.is_empty() => out.write_str("[]"),
            Value::Array(items) => {
                out.write_str("[\n")?;
                let child = self.element();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_str(",\n")?;
                    }
                    child.print(out, item)?;
                }
                out.write_char('\n')?;
                pad(out, self.content_column())?;
                out.write_char(']')
            }
            Value::Object(members) if members.is_empty() => out.write_str("{}"),
            Value::Object(members) => {
                out.write_str("{\n")?;
                let mut prefix = String::new();
                for (i, (key, member)) in members.iter().enumerate() {
                    if i > 0 {
                        out.write_str(",\n")?;
                    }
                    prefix.clear();
                    write_escaped(&mut prefix, key)?;
                    prefix.push_str(": ");
                    self.member(&prefix).print(out, member)?;
                }
                out.write_char('\n')?;
                pad(out, self.content_column())?;
                out.write_char('}')
            }
        }
    }
}

fn pad<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    write!(out, "{:width$}", "")
}

fn write_float<W: Write>(out: &mut W, f: f64) -> fmt::Result {
    if f.is_finite() {
        // Debug keeps the `.0` on whole numbers and is shortest round-trip.
        write!(out, "{f:?}")
    } else {
        out.write_str("null")
    }
}

fn write_escaped<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            _ => out.write_char(ch)?,
        }
    }
    out.write_char('"')
}
