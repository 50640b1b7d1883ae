//! `docjson` CLI — check, pretty-print, and compact documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"b":[1,2.5],"a":"x"}' | docjson format
//!
//! # Pretty-print from file to file with a 2-column indent
//! docjson format -i requests.json -o requests.pretty.json --indent 2
//!
//! # Validate only
//! docjson check -i requests.json
//!
//! # Single-line output
//! docjson compact -i requests.json
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docjson_core::parser::DEFAULT_MAX_DEPTH;
use docjson_core::printer::DEFAULT_INDENT_STEP;
use docjson_core::{Document, ParseConfig, PrintConfig};

#[derive(Parser)]
#[command(
    name = "docjson",
    version,
    about = "Check, pretty-print and compact docjson documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write its canonical pretty form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Columns per nesting level
        #[arg(long, default_value_t = DEFAULT_INDENT_STEP)]
        indent: usize,
        /// Maximum container nesting accepted by the parser
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Parse a document and report whether it is well-formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum container nesting accepted by the parser
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Parse a document and write it on a single line
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum container nesting accepted by the parser
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            indent,
            max_depth,
        } => {
            let doc = read_document(input.as_deref(), &ParseConfig { max_depth })?;
            let mut out = open_output(output.as_deref())?;
            doc.print_with(&mut out, &PrintConfig { indent_step: indent })
                .context("Failed to write formatted document")?;
            finish_output(out)?;
        }
        Commands::Check { input, max_depth } => {
            let doc = read_document(input.as_deref(), &ParseConfig { max_depth })?;
            println!("ok: {}", doc.root().kind());
        }
        Commands::Compact {
            input,
            output,
            max_depth,
        } => {
            let doc = read_document(input.as_deref(), &ParseConfig { max_depth })?;
            let mut out = open_output(output.as_deref())?;
            serde_json::to_writer(&mut out, &doc).context("Failed to write compact document")?;
            finish_output(out)?;
        }
    }

    Ok(())
}

/// Parse one document from a file or stdin. Content after the document is ignored.
fn read_document(path: Option<&str>, config: &ParseConfig) -> Result<Document> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
            Document::parse_with(BufReader::new(file), config)
                .with_context(|| format!("Failed to parse document in {}", path))
        }
        None => Document::parse_with(io::stdin().lock(), config)
            .context("Failed to parse document from stdin"),
    }
}

fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create file: {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Terminate the document with a newline and flush.
fn finish_output(mut out: Box<dyn Write>) -> Result<()> {
    writeln!(out).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
