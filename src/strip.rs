//! strip command: Drop query strings from URLs
//!
//! Takes URLs as arguments or as stdin lines and prints each one truncated
//! at its first `?`, in input order.

use crate::extract::strip_arguments;
use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead};

#[derive(Args)]
pub struct StripArgs {
    /// URLs to strip
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Read URLs from stdin (one per line)
    #[arg(long)]
    stdin: bool,
}

/// Run the strip command
pub fn run_strip(args: StripArgs) -> Result<()> {
    let urls = get_urls(&args);

    if urls.is_empty() {
        eprintln!("Usage:");
        eprintln!("  urlsift strip <URL>...  Strip query strings from arguments");
        eprintln!("  urlsift strip --stdin   Strip query strings from stdin lines");
        std::process::exit(1);
    }

    for url in &urls {
        println!("{}", strip_arguments(url));
    }

    Ok(())
}

/// Get URLs from arguments or stdin
fn get_urls(args: &StripArgs) -> Vec<String> {
    if !args.urls.is_empty() {
        return args.urls.clone();
    }

    if args.stdin {
        let stdin = io::stdin();
        return stdin
            .lock()
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .collect();
    }

    Vec::new()
}
