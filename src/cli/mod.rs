//! CLI commands implementation.
//!
//! One binary, three subcommands: `extract` runs the OCR pipeline, `notify`
//! runs the email discovery pipeline against a saved record, `check` reports
//! external tool availability. Inputs omitted on the command line are
//! prompted for interactively.

mod check;
mod extract;
mod notify;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ocrscan")]
#[command(about = "OCR text extraction, keyword search, and email discovery")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from an image or PDF and search it for a keyword
    Extract {
        /// Path to the file (image or PDF); prompted for when omitted
        file: Option<PathBuf>,

        /// Keyword to search for; prompted for when omitted
        #[arg(short, long)]
        keyword: Option<String>,

        /// Tesseract language
        #[arg(short, long, default_value = "eng")]
        lang: String,
    },

    /// Scan a saved extraction record for email addresses and simulate outreach
    Notify {
        /// Path to the extraction record JSON; prompted for when omitted
        file: Option<PathBuf>,

        /// Save discovered addresses without asking
        #[arg(short = 'y', long)]
        save: bool,
    },

    /// Check external OCR tool availability
    Check,
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            keyword,
            lang,
        } => extract::cmd_extract(file, keyword, &lang),
        Commands::Notify { file, save } => notify::cmd_notify(file, save),
        Commands::Check => check::cmd_check(),
    }
}
