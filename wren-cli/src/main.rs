//! Wren CLI
//!
//! Loads a restricted-HTML document from a file or an inline string and
//! prints the parsed tree, or the classified parse error.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use wren_html::Document;

/// Parse a whitelist-restricted HTML document and print its tree.
#[derive(Parser)]
#[command(name = "wren", version, about)]
struct Args {
    /// Path to an HTML file to load
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse an inline HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut doc = Document::new();
    let loaded = match (&args.html, &args.path) {
        (Some(html), _) => doc.load_str(html),
        (None, Some(path)) => doc.load_file(path),
        // clap guarantees one of the two is present.
        (None, None) => unreachable!(),
    };

    match loaded {
        Ok(()) => {
            doc.print();
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
