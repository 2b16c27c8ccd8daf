//! urlsift CLI
//!
//! Sifts URL-like substrings out of free text: files, stdin, or arguments
//! in, a deduplicated report out.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod extract;
mod scan;
mod strip;

use scan::{run_scan, ScanArgs};
use strip::{run_strip, StripArgs};

#[derive(Parser)]
#[command(name = "urlsift")]
#[command(version)]
#[command(about = "Sift URL-like substrings out of free text")]
#[command(long_about = "Extracts http/https/ftp/ftps and www. URLs from arbitrary text.\n\nCommands:\n  scan    Extract URLs from files, stdin, or a literal argument\n  strip   Drop query strings from URLs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract URLs from files, stdin, or a literal argument
    Scan(ScanArgs),
    /// Drop query strings from URLs
    Strip(StripArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => run_scan(args).await,
        Commands::Strip(args) => run_strip(args),
    }
}
