//! scan command: Extract URLs from text inputs
//!
//! Reads files (or glob patterns), stdin, or a literal argument, runs the
//! extractor over each input, and prints one deduplicated report.

use crate::extract::extract_urls;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Args)]
pub struct ScanArgs {
    /// Files or glob patterns to scan
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    stdin: bool,

    /// Extract from a literal text argument
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Drop the query string from each matched URL
    #[arg(long)]
    strip_args: bool,

    /// Output format: json (default), yaml, or plain
    #[arg(long, short, env = "URLSIFT_FORMAT", default_value = "json")]
    format: String,
}

/// Report of one scan over all inputs (compact)
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub scanned: usize,
    pub total: usize,
    pub urls: Vec<String>,
}

/// Run the scan command
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    if args.files.is_empty() && !args.stdin && args.text.is_none() {
        eprintln!("Usage:");
        eprintln!("  urlsift scan <FILE>...      Extract URLs from files or globs");
        eprintln!("  urlsift scan --stdin        Extract URLs from stdin");
        eprintln!("  urlsift scan --text <TEXT>  Extract URLs from an argument");
        std::process::exit(1);
    }

    let mut urls: HashSet<String> = HashSet::new();
    let mut scanned = 0;

    if let Some(text) = &args.text {
        urls.extend(extract_urls(text, args.strip_args));
        scanned += 1;
    }

    if args.stdin {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read stdin")?;
        urls.extend(extract_urls(&buf, args.strip_args));
        scanned += 1;
    }

    let files = expand_files(&args.files)?;
    for file in &files {
        eprintln!("  -> {}", file.display());
        let content = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        urls.extend(extract_urls(&content, args.strip_args));
    }
    scanned += files.len();

    // Sort for deterministic output; the set itself is unordered
    let mut urls: Vec<String> = urls.into_iter().collect();
    urls.sort();

    let report = ScanReport {
        scanned,
        total: urls.len(),
        urls,
    };

    println!("{}", render(&report, &args.format)?);
    eprintln!("Done: {} unique URLs from {} inputs", report.total, report.scanned);

    Ok(())
}

/// Expand glob patterns to file paths; plain paths pass through
fn expand_files(patterns: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern_str = pattern.to_string_lossy();

        if pattern_str.contains('*') {
            for entry in glob::glob(&pattern_str)
                .with_context(|| format!("Bad glob pattern: {}", pattern_str))?
            {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
        } else {
            files.push(pattern.clone());
        }
    }

    Ok(files)
}

/// Render a report in the requested format (unknown formats fall back to JSON)
fn render(report: &ScanReport, format: &str) -> Result<String> {
    let rendered = match format {
        "yaml" | "yml" => serde_yaml::to_string(report)?,
        "plain" | "text" => report.urls.join("\n"),
        _ => serde_json::to_string(report)?,
    };
    Ok(rendered)
}
