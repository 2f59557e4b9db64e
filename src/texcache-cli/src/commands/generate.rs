//! Generation command handler
//!
//! Writes `textures.cache` for every recognized descriptor and prints a
//! per-file report followed by the run summary.

use crate::report::{outcome_lines, separator, summary_lines};
use anyhow::{Context, Result};
use std::path::Path;
use texcache::RunSummary;

/// Handle a generation run over `directory`
pub fn handle(directory: &Path) -> Result<RunSummary> {
    let summary = texcache::generate_caches(directory, |outcome| {
        for line in outcome_lines(outcome) {
            println!("{}", line);
        }
        println!("{}", separator('-'));
    })
    .with_context(|| format!("Cannot generate caches under {}", directory.display()))?;

    println!();
    for line in summary_lines(&summary) {
        println!("{}", line);
    }

    Ok(summary)
}
