//! # docjson-core
//!
//! Strict parser and canonical pretty-printer for a small JSON dialect.
//!
//! The dialect is JSON with two deliberate restrictions: strings accept only
//! the `\n`, `\t`, `\r`, `\"` and `\\` escapes (no `\uXXXX`), and numbers are
//! either 32-bit integers or `f64` floats. Integer literals that overflow `i32`
//! quietly become floats.
//!
//! ## Quick start
//!
//! ```rust
//! use docjson_core::{Document, Value};
//!
//! let doc: Document = r#"{"b": [1, 2.5], "a": "x"}"#.parse().unwrap();
//! assert_eq!(doc.root().as_object().unwrap()["a"], Value::from("x"));
//!
//! let mut out = Vec::new();
//! doc.print(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "{\n    \"a\": \"x\",\n    \"b\": [\n             1,\n             2.5\n         ]\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and its typed accessors
//! - [`parser`] — recursive-descent parser over any `BufRead`
//! - [`printer`] — canonical indented output
//! - [`document`] — `Document`, the parse/print facade
//! - [`error`] — `ParseError` and `TypeMismatch`
//! - [`interop`] — `serde::Serialize` and `serde_json::Value` conversion

pub mod document;
pub mod error;
pub mod interop;
pub mod parser;
pub mod printer;
pub mod value;

pub use document::Document;
pub use error::{Found, ParseError, ParseErrorKind, TypeMismatch};
pub use parser::{ParseConfig, Parser};
pub use printer::{write_value, PrintConfig, Pretty};
pub use value::{Array, Object, Value, ValueKind};
