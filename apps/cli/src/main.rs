//! strand - translate nucleotide FASTA files and summarize their composition.
//!
//! ## Usage
//!
//! ```bash
//! strand headers genes.fasta
//! strand analyze genes.fasta --frame forward0 --all --percentage --aa-count --protein
//! strand analyze genes.fasta -f -2 --match '^>chr' --protein --format text
//! ```
//!
//! Set `STRAND_LOG=debug` for per-record diagnostics on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use strand_cli::commands::{analysis, file};
use strand_cli::dto::Payloads;
use strand_cli::logging;
use strand_core::ReadingFrame;

#[derive(Parser)]
#[command(
    name = "strand",
    version,
    about = "Translate nucleotide FASTA files and summarize their composition"
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the headers of a FASTA file
    Headers {
        file: PathBuf,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Translate records in one reading frame and report statistics
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    file: PathBuf,

    /// Reading frame: forward0-2, reverse0-2, +1..+3, -1..-3 or frame1-6
    #[arg(short, long, allow_hyphen_values = true)]
    frame: ReadingFrame,

    /// Header to report (repeatable; leading '>' optional)
    #[arg(long = "header")]
    headers: Vec<String>,

    /// Report headers matching this regex
    #[arg(long = "match")]
    pattern: Option<String>,

    /// Report every header
    #[arg(long)]
    all: bool,

    /// Include base composition percentages
    #[arg(long)]
    percentage: bool,

    /// Include amino acid counts
    #[arg(long)]
    aa_count: bool,

    /// Include the formatted protein sequence
    #[arg(long)]
    protein: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("[strand] logger already installed: {}", e);
    }

    match cli.command {
        Command::Headers { file: path, pretty } => {
            let headers = file::list_headers(&path)
                .with_context(|| format!("Could not list headers of {}", path.display()))?;
            print_json(&headers, pretty)?;
        }
        Command::Analyze(args) => {
            let options = analysis::AnalysisOptions {
                payloads: Payloads {
                    percentage: args.percentage,
                    aa_count: args.aa_count,
                    protein: args.protein,
                },
                headers: args.headers,
                pattern: args.pattern,
                all_headers: args.all,
            };
            let response = analysis::analyze_file(&args.file, args.frame, &options)
                .with_context(|| format!("Could not analyze {}", args.file.display()))?;

            match args.format {
                OutputFormat::Json => print_json(&response, args.pretty)?,
                OutputFormat::Text => print!("{}", response.to_text()),
            }
        }
    }

    Ok(())
}
