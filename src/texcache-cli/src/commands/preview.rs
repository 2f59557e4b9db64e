//! Preview command handler
//!
//! Scans without writing, lists what would be generated, and asks for
//! confirmation before running the real generation pass.

use super::generate;
use crate::report::separator;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use texcache::{PreviewReport, RunSummary};

/// Answers accepted as "yes"
const AFFIRMATIVE: &[&str] = &["y", "yes", "是"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Prompt user for confirmation
///
/// EOF or an empty answer counts as "no".
pub fn prompt_confirmation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "\nGenerate textures.cache files? [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(is_affirmative(&answer))
}

/// Print the scan results
pub fn print_report(report: &PreviewReport) {
    for (i, candidate) in report.candidates.iter().enumerate() {
        println!("{}. {}", i + 1, candidate.descriptor.display());
        println!("   Format: {}", candidate.format);
        println!("   Textures: {}", candidate.texture_count());
        println!("   Will generate: {}", candidate.cache_path().display());
    }

    if !report.failures.is_empty() {
        println!();
        println!("Unreadable descriptors ({}):", report.failures.len());
        for (path, e) in &report.failures {
            println!("✗ {}", path.display());
            println!("  Details: {}", e);
        }
    }

    println!();
    println!("{}", totals_line(report));
}

/// Closing line of the preview report
pub fn totals_line(report: &PreviewReport) -> String {
    format!(
        "Found {} processable index.json file(s), {} skipped (unrecognized format)",
        report.candidates.len(),
        report.skipped
    )
}

/// Run preview mode, reading the confirmation from `input`
///
/// Returns the generation summary when the user confirmed, `None` otherwise.
pub fn run<R: BufRead, W: Write>(
    directory: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<Option<RunSummary>> {
    let report = texcache::scan(directory)
        .with_context(|| format!("Cannot preview {}", directory.display()))?;

    println!("Preview - scan results:");
    println!("{}", separator('-'));

    if report.is_empty() {
        if !report.failures.is_empty() {
            print_report(&report);
        }
        println!("No processable index.json files found");
        return Ok(None);
    }

    print_report(&report);

    if !prompt_confirmation(input, output)? {
        println!("Cancelled");
        return Ok(None);
    }

    println!("\nGenerating...");
    println!("{}", separator('='));
    generate::handle(directory).map(Some)
}

/// Handle the preview command against the terminal
pub fn handle(directory: &Path) -> Result<Option<RunSummary>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run(directory, &mut input, &mut output)
}
