//! llmd CLI - render LLM Markdown-subset text to an HTML fragment.
//!
//! Reads Markdown-subset text from a file (or stdin), renders it with
//! `llmd-renderer`, and writes the HTML fragment to a file (or stdout).

mod error;
mod output;

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use llmd_renderer::{MarkdownRenderer, RenderOptions};

use error::CliError;
use output::Output;

/// Render LLM Markdown-subset text to an HTML fragment.
#[derive(Parser)]
#[command(name = "llmd", version, about)]
struct Cli {
    /// Input file (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use the reduced feature profile: paragraphs, unordered lists and
    /// inline code only.
    #[arg(long)]
    basic: bool,

    /// Emit a JSON object `{"html": "..."}` instead of the raw fragment.
    #[arg(long)]
    json: bool,

    /// Enable info-level logging.
    #[arg(short, long)]
    verbose: bool,
}

/// JSON payload for `--json` output.
#[derive(Serialize)]
struct RenderedPayload {
    html: String,
}

fn main() {
    let cli = Cli::parse();
    let out = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        out.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let options = if cli.basic {
        RenderOptions::basic()
    } else {
        RenderOptions::full()
    };
    tracing::info!(bytes = source.len(), basic = cli.basic, "rendering input");

    let html = MarkdownRenderer::with_options(options).render(&source);
    let payload = if cli.json {
        serde_json::to_string(&RenderedPayload { html })?
    } else {
        html
    };

    match &cli.output {
        Some(path) => fs::write(path, payload)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
