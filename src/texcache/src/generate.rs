//! Cache generation over a directory tree.
//!
//! Each `index.json` is processed independently: a failure on one descriptor
//! is recorded in the [`RunSummary`] and the walk moves on. Only a missing
//! root aborts the run.

use crate::cache::{write_cache, DESCRIPTOR_FILE_NAME};
use crate::descriptor::{extract_textures, DescriptorFormat, TextureList};
use crate::discovery::walk_files_named;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a single descriptor
#[derive(Debug)]
pub enum OutcomeStatus {
    Generated {
        cache: PathBuf,
        format: DescriptorFormat,
        textures: TextureList,
    },
    Skipped,
    Failed(Error),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub descriptor: PathBuf,
    pub status: OutcomeStatus,
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: &OutcomeStatus) {
        match status {
            OutcomeStatus::Generated { .. } => self.succeeded += 1,
            OutcomeStatus::Skipped => self.skipped += 1,
            OutcomeStatus::Failed(_) => self.errored += 1,
        }
    }

    /// Number of descriptors visited
    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.errored
    }

    pub fn is_clean(&self) -> bool {
        self.errored == 0
    }
}

/// Fail early when the run root is unusable
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Read and parse a descriptor file
pub fn load_descriptor(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Process one descriptor: extract its textures and write the cache
pub fn process_descriptor(path: &Path) -> OutcomeStatus {
    let descriptor = match load_descriptor(path) {
        Ok(value) => value,
        Err(e) => return OutcomeStatus::Failed(e),
    };

    let extraction = extract_textures(&descriptor);
    let format = extraction.format();
    let Some(textures) = extraction.into_textures() else {
        return OutcomeStatus::Skipped;
    };

    match write_cache(path, &textures) {
        Ok(cache) => OutcomeStatus::Generated {
            cache,
            format,
            textures,
        },
        Err(e) => OutcomeStatus::Failed(e),
    }
}

/// Generate `textures.cache` for every recognized descriptor under `root`
///
/// The handler sees each outcome as it happens, in walk order.
pub fn generate_caches<F>(root: &Path, mut handler: F) -> Result<RunSummary>
where
    F: FnMut(&FileOutcome),
{
    check_root(root)?;

    let mut summary = RunSummary::default();

    walk_files_named(root, DESCRIPTOR_FILE_NAME, |path| {
        let status = process_descriptor(path);

        match &status {
            OutcomeStatus::Generated { cache, format, textures } => tracing::debug!(
                "Wrote {} ({}, {} textures)",
                cache.display(),
                format.label(),
                textures.len()
            ),
            OutcomeStatus::Skipped => {
                tracing::debug!("No texture list in {}", path.display())
            }
            OutcomeStatus::Failed(e) => tracing::warn!("Failed {}: {}", path.display(), e),
        }

        summary.record(&status);
        handler(&FileOutcome {
            descriptor: path.to_path_buf(),
            status,
        });
        Ok(())
    })?;

    tracing::info!(
        "Generation finished: {} written, {} skipped, {} failed",
        summary.succeeded,
        summary.skipped,
        summary.errored
    );

    Ok(summary)
}
