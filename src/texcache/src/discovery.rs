//! Descriptor discovery over a directory tree

use crate::cache::DESCRIPTOR_FILE_NAME;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk files in a directory tree whose file name is exactly `name`
///
/// The root itself is searched too. Entries are visited in file-name order
/// within each directory. A symlink counts when its target is a regular file.
/// Entries the walker cannot read are logged and skipped; an error from the
/// handler stops the walk.
pub fn walk_files_named<F>(root: &Path, name: &str, mut handler: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_name() == name && entry.path().is_file() {
            handler(entry.path())?;
        }
    }

    Ok(())
}

/// Collect every `index.json` under `root`
pub fn find_descriptors(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    walk_files_named(root, DESCRIPTOR_FILE_NAME, |path| {
        files.push(path.to_path_buf());
        Ok(())
    })?;

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_descriptors_recursive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("index.json"), "{}").unwrap();
        fs::write(root.join("a/index.json"), "{}").unwrap();
        fs::write(root.join("b/nested/index.json"), "{}").unwrap();
        fs::write(root.join("b/other.json"), "{}").unwrap();

        let found = find_descriptors(root).unwrap();

        assert_eq!(
            found,
            vec![
                root.join("a/index.json"),
                root.join("b/nested/index.json"),
                root.join("index.json"),
            ]
        );
    }

    #[test]
    fn test_directory_named_like_descriptor_is_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("index.json")).unwrap();

        assert!(find_descriptors(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_name_match_is_exact() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("Index.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("index.json.bak"), "{}").unwrap();

        assert!(find_descriptors(temp_dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_descriptor_is_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("store")).unwrap();
        fs::create_dir_all(root.join("haru")).unwrap();
        fs::write(root.join("store/haru.json"), "{}").unwrap();
        std::os::unix::fs::symlink(root.join("store/haru.json"), root.join("haru/index.json"))
            .unwrap();

        assert_eq!(find_descriptors(root).unwrap(), vec![root.join("haru/index.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing.json"),
            temp_dir.path().join("index.json"),
        )
        .unwrap();

        assert!(find_descriptors(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_handler_error_stops_walk() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("a")).unwrap();
        fs::create_dir_all(temp_dir.path().join("b")).unwrap();
        fs::write(temp_dir.path().join("a/index.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("b/index.json"), "{}").unwrap();

        let mut visited = 0;
        let result = walk_files_named(temp_dir.path(), "index.json", |_| {
            visited += 1;
            Err(std::io::Error::other("stop").into())
        });

        assert!(result.is_err());
        assert_eq!(visited, 1);
    }
}
