//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report written by `radix-bench` into a
//! Markdown table.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use decimal_radix_sort::report::load_lino_report;

/// Convert a Links Notation benchmark report to Markdown.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let report = load_lino_report(&args.input)
        .with_context(|| format!("could not read report {}", args.input.display()))?;
    let markdown = report.to_markdown_table();

    match args.output {
        Some(path) => {
            fs::write(&path, &markdown)
                .with_context(|| format!("could not write {}", path.display()))?;
            info!(path = %path.display(), "markdown report written");
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
