//! Dry-run scan: what a generation pass would write, without writing it.

use crate::cache::cache_path_for;
use crate::descriptor::{extract_textures, DescriptorFormat, TextureList};
use crate::discovery::find_descriptors;
use crate::error::{Error, Result};
use crate::generate::{check_root, load_descriptor};
use std::path::{Path, PathBuf};

/// A descriptor that would get a cache file
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub descriptor: PathBuf,
    pub format: DescriptorFormat,
    pub textures: TextureList,
}

impl Candidate {
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn cache_path(&self) -> PathBuf {
        cache_path_for(&self.descriptor)
    }
}

#[derive(Debug, Default)]
pub struct PreviewReport {
    pub candidates: Vec<Candidate>,
    pub skipped: usize,
    /// Descriptors that could not be read or parsed
    pub failures: Vec<(PathBuf, Error)>,
}

impl PreviewReport {
    /// True when nothing would be generated
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Scan `root` the same way [`crate::generate_caches`] does, but write nothing
pub fn scan(root: &Path) -> Result<PreviewReport> {
    check_root(root)?;

    let mut report = PreviewReport::default();

    for path in find_descriptors(root)? {
        let descriptor = match load_descriptor(&path) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Cannot preview {}: {}", path.display(), e);
                report.failures.push((path, e));
                continue;
            }
        };

        let extraction = extract_textures(&descriptor);
        let format = extraction.format();
        match extraction.into_textures() {
            Some(textures) => report.candidates.push(Candidate {
                descriptor: path,
                format,
                textures,
            }),
            None => report.skipped += 1,
        }
    }

    tracing::info!(
        "Preview found {} candidates ({} skipped, {} unreadable)",
        report.candidates.len(),
        report.skipped,
        report.failures.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CACHE_FILE_NAME, DESCRIPTOR_FILE_NAME};
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_scan_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let model = temp_dir.path().join("shizuku");
        fs::create_dir_all(&model).unwrap();
        fs::write(model.join(DESCRIPTOR_FILE_NAME), r#"{"textures": ["a.png", "b.png"]}"#).unwrap();

        let report = scan(temp_dir.path()).unwrap();

        assert_eq!(report.candidates.len(), 1);
        let candidate = &report.candidates[0];
        assert_eq!(candidate.format, DescriptorFormat::Standard);
        assert_eq!(candidate.texture_count(), 2);
        assert_eq!(candidate.textures, vec![json!("a.png"), json!("b.png")]);
        assert_eq!(candidate.cache_path(), model.join(CACHE_FILE_NAME));
        assert!(!model.join(CACHE_FILE_NAME).exists());
    }

    #[test]
    fn test_scan_separates_outcomes() {
        let temp_dir = tempfile::tempdir().unwrap();
        for (name, contents) in [
            ("a", r#"{"FileReferences": {"Textures": []}}"#),
            ("b", r#"{"foo": "bar"}"#),
            ("c", "not json"),
        ] {
            let dir = temp_dir.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(DESCRIPTOR_FILE_NAME), contents).unwrap();
        }

        let report = scan(temp_dir.path()).unwrap();

        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.candidates[0].format, DescriptorFormat::Cubism3Plus);
        assert_eq!(report.candidates[0].texture_count(), 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].1.is_parse_error());
    }

    #[test]
    fn test_scan_empty_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let report = scan(temp_dir.path()).unwrap();

        assert!(report.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = scan(&temp_dir.path().join("missing"));

        assert!(matches!(result, Err(Error::RootNotFound(_))));
    }
}
