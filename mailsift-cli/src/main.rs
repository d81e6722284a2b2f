//! mailsift CLI - extract unique email addresses from a text file.
//!
//! Reads the input in full, collects every email-like substring, and writes
//! the sorted unique list to the output file, one address per line.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

use config::{RunSettings, SiftConfig};
use output::{OutputFormat, Summary};

/// Extract unique emails from a text file.
#[derive(Parser)]
#[command(name = "mailsift")]
#[command(author, version)]
#[command(about = "Extract unique emails from a text file.")]
#[command(after_help = "Examples:
  mailsift                                   Read input.txt, write emails_output.txt
  mailsift --input notes.txt --show-count    Also print how many were found
  mailsift --config mailsift.toml            Take defaults from a config file")]
pub struct Cli {
    /// Path to input text file [default: input.txt]
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Path to save extracted emails, one per line [default: emails_output.txt]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print how many unique emails were extracted
    #[arg(long)]
    show_count: bool,

    /// TOML file with defaults for --input, --output and --show-count
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Summary format used by --show-count
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SiftConfig::load(path)?,
        None => SiftConfig::default(),
    };
    let settings = RunSettings::resolve(cli.input, cli.output, cli.show_count, &config);
    tracing::debug!(?settings, "resolved settings");

    let text = mailsift_core::read_text_file(&settings.input)?;
    let emails = mailsift_core::extract(&text);
    mailsift_core::write_emails(&settings.output, &emails)?;

    tracing::info!(
        input = %settings.input.display(),
        output = %settings.output.display(),
        unique = emails.len(),
        "extraction complete"
    );

    if settings.show_count {
        let summary = Summary::new(emails.len(), settings.output);
        println!("{}", summary.render(cli.format));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    colored::control::set_override(std::io::stderr().is_terminal());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", "Error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
