//! Ocrmatch: tolerant decoder for screen-OCR match output.
//!
//! Ocrmatch reconstructs typed match records from the JSON-like text an
//! external screen-recognition tool prints. The decoder is deliberately
//! tolerant at the field level: a missing or malformed field resolves
//! to its type's zero value instead of failing the call. A payload whose
//! structure cannot be established fails loudly with the offending text
//! attached.
//!
//! # Modules
//!
//! - [`decode`]: payload segmentation, value parsing, record projection
//! - [`workflow`]: window/pointer/capture wrappers around the external tool
//! - [`error`]: error types for ocrmatch operations

pub mod decode;
pub mod error;
pub mod workflow;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use decode::{from_ocr_json_str, read_ocr_json, stream_matches, MatchStream, OcrMatch};
pub use error::OcrMatchError;

/// The ocrmatch CLI application.
#[derive(Parser)]
#[command(name = "ocrmatch")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode a recognition payload into match records.
    Decode(DecodeArgs),

    /// Decode a payload and keep matches containing a search term.
    Find(FindArgs),
}

/// Arguments for the decode subcommand.
#[derive(clap::Args)]
struct DecodeArgs {
    /// Input payload file ('-' reads standard input).
    input: PathBuf,

    /// Output format for the records ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the find subcommand.
#[derive(clap::Args)]
struct FindArgs {
    /// Input payload file ('-' reads standard input).
    input: PathBuf,

    /// Term to look for in recognized text (ASCII case-insensitive).
    term: String,

    /// Output format for the records ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the ocrmatch CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), OcrMatchError> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decode(args)) => run_decode(args),
        Some(Commands::Find(args)) => run_find(args),
        None => {
            println!("ocrmatch {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Tolerant decoder for screen-OCR match output.");
            println!();
            println!("Run 'ocrmatch --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the decode subcommand.
fn run_decode(args: DecodeArgs) -> Result<(), OcrMatchError> {
    let matches = load_matches(&args.input)?;
    print_matches(&matches, &args.output)
}

/// Execute the find subcommand.
///
/// Exits non-zero when nothing matched, so scripts can branch on it.
fn run_find(args: FindArgs) -> Result<(), OcrMatchError> {
    let matches = load_matches(&args.input)?;
    let found: Vec<OcrMatch> = matches
        .into_iter()
        .filter(|m| m.text_contains(&args.term))
        .collect();

    if found.is_empty() {
        return Err(OcrMatchError::NoMatches { term: args.term });
    }
    print_matches(&found, &args.output)
}

fn load_matches(input: &Path) -> Result<Vec<OcrMatch>, OcrMatchError> {
    if input.as_os_str() == "-" {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .map_err(OcrMatchError::Io)?;
        return from_ocr_json_str(&payload);
    }
    read_ocr_json(input)
}

fn print_matches(matches: &[OcrMatch], output: &str) -> Result<(), OcrMatchError> {
    match output {
        "json" => {
            let json = serde_json::to_string_pretty(matches)?;
            println!("{json}");
        }
        "text" => {
            println!("Found {} match(es)", matches.len());
            for (index, m) in matches.iter().enumerate() {
                println!(
                    "  Match {}: '{}' at ({}, {}) confidence: {}",
                    index, m.text, m.center_x, m.center_y, m.confidence
                );
            }
        }
        other => {
            return Err(OcrMatchError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
