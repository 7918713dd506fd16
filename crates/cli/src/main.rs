//! CLI tool for summarizing documents with the Gemini API.

use anyhow::{Context, Result};
use clap::Parser;
use docsum_core::UploadedFile;
use docsum_gemini::GeminiClient;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Summarize documents (.pdf, .txt, .pptx) or piped text with Gemini.
#[derive(Parser, Debug)]
#[command(name = "docsum")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document(s) (.pdf, .txt or .pptx)
    #[arg(required_unless_present = "stdin")]
    input: Vec<PathBuf>,

    /// Read text to summarize from stdin instead of a file
    #[arg(short, long)]
    stdin: bool,

    /// Print the extracted text instead of requesting a summary
    #[arg(short = 'x', long)]
    extract_only: bool,

    /// Emit one JSON report per input instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Per-input report, printed as JSON with `--json`.
#[derive(Debug, Serialize)]
struct Report {
    filename: String,
    format: &'static str,
    characters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    // Resolve the credential up front so a missing key fails before any
    // extraction work, not after it.
    let client = if args.extract_only {
        None
    } else {
        Some(GeminiClient::from_env()?)
    };

    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let report = summarize_text(text.trim(), client.as_ref())?;
        emit(&report, &args)?;
        return Ok(());
    }

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, client.as_ref()) {
            Ok(report) => emit(&report, &args)?,
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Extract one document and, unless extraction-only, summarize it.
fn process_file(input_path: &Path, client: Option<&GeminiClient>) -> Result<Report> {
    let file = UploadedFile::from_path(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let format = docsum_extract::classify(&file)?;
    let text = docsum_extract::extract_as(&file, format)?;
    log::debug!("extracted {} characters from '{}'", text.len(), file.name);

    let summary = match client {
        Some(client) => Some(
            client
                .summarize(&text)
                .with_context(|| format!("Failed to summarize {}", file.name))?,
        ),
        None => None,
    };

    Ok(Report {
        filename: file.name,
        format: format.name(),
        characters: text.chars().count(),
        text: if summary.is_none() { Some(text) } else { None },
        summary,
    })
}

/// Summarize already-plain text from stdin; no extraction step.
fn summarize_text(text: &str, client: Option<&GeminiClient>) -> Result<Report> {
    let summary = match client {
        Some(client) => Some(client.summarize(text).context("Failed to summarize input")?),
        None => None,
    };

    Ok(Report {
        filename: "-".to_string(),
        format: "TEXT",
        characters: text.chars().count(),
        text: if summary.is_none() {
            Some(text.to_string())
        } else {
            None
        },
        summary,
    })
}

fn emit(report: &Report, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if let Some(summary) = &report.summary {
        println!("{}", summary);
    } else if let Some(text) = &report.text {
        println!("{}", text);
    }
    Ok(())
}
