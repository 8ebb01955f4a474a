use std::io;

use anyhow::Result;
use clap::Parser;
use toggle_comment::{Config, run_with_config};
use tracing_subscriber::EnvFilter;

/// toggle-comment - comment or uncomment a block of text.
///
/// Reads text from stdin and writes it back to stdout with comment markers
/// added or removed, preserving indentation. Meant to be used as an editor
/// filter over a selection.
#[derive(Parser, Debug)]
#[command(
    name = "toggle-comment",
    author,
    version,
    about = "Toggle comment markers on text read from stdin",
    long_about = r#"Toggle comment markers on text read from stdin, preserving indentation.

If every non-blank line already starts with PREFIX (or, with a SUFFIX, the
first line does), the markers are removed; otherwise they are added.

  • with only PREFIX, each non-blank line is commented at the common indent
  • with PREFIX and SUFFIX, the whole block is wrapped once
  • blank lines are passed through untouched

Typical usage:
  toggle-comment '//' < main.rs
  toggle-comment '/*' '*/' < main.c
  toggle-comment -- -- < query.sql
"#
)]
struct Args {
    /// Comment marker placed before the text (e.g. //, #, /*).
    #[arg(value_name = "PREFIX", allow_hyphen_values = true)]
    prefix: String,

    /// Closing marker for block comments (e.g. */, -->).
    ///
    /// When given, the text is wrapped once as a block instead of
    /// commenting every line.
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    suffix: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let cfg = Config {
        prefix: args.prefix,
        suffix: args.suffix,
    };

    run_with_config(cfg, io::stdin().lock(), io::stdout().lock())
}
