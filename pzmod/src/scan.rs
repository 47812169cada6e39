//! Directory traversal utilities

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List every regular file under `root` as a root-relative path.
///
/// Paths use forward slashes and are sorted lexicographically so output is
/// deterministic across platforms and filesystems. Directories are not
/// listed, the root itself is never an entry, and symlinks are not followed.
/// An empty tree yields an empty vec.
pub fn list_files(root: impl AsRef<Path>) -> Result<Vec<String>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::InvalidPath(e.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");
            files.push(relative);
        }
    }

    files.sort();
    Ok(files)
}

/// Total size in bytes over the same file set as [`list_files`].
pub fn total_size(root: impl AsRef<Path>) -> Result<u64> {
    let mut total = 0;

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_tree() {
        let temp = TempDir::new().unwrap();
        assert!(list_files(temp.path()).unwrap().is_empty());
        assert_eq!(total_size(temp.path()).unwrap(), 0);
    }

    #[test]
    fn test_lists_nested_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("media/scripts")).unwrap();
        fs::write(temp.path().join("zebra.txt"), "z").unwrap();
        fs::write(temp.path().join("media/scripts/item.txt"), "i").unwrap();
        fs::write(temp.path().join("mod.info"), "id=X\n").unwrap();

        let files = list_files(temp.path()).unwrap();
        assert_eq!(
            files,
            vec!["media/scripts/item.txt", "mod.info", "zebra.txt"]
        );
    }

    #[test]
    fn test_directories_are_not_listed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("media/lua")).unwrap();

        assert!(list_files(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_total_size_sums_file_bytes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.bin"), [0u8; 100]).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.bin"), [0u8; 28]).unwrap();

        assert_eq!(total_size(temp.path()).unwrap(), 128);
    }
}
