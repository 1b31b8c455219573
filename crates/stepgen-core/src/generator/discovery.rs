//! Metadata file discovery.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{IoResultExt, Result};

const METADATA_EXTENSION: &str = "yaml";

/// Collects every `.yaml` file below `dir`, recursively.
///
/// Entries of each directory are visited in sorted order, so the result is
/// the same on every run.
///
/// # Errors
///
/// Returns `GeneratorError::FileSystem` if `dir` or one of its subdirectories
/// cannot be read.
pub fn metadata_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .fs_context(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .fs_context(dir)?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == METADATA_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::GeneratorError;

    #[test]
    fn test_collects_yaml_recursively_in_sorted_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("nested")).expect("Failed to create dir");
        for file in ["b.yaml", "a.yaml", "notes.md", "nested/c.yaml", "c.yml"] {
            fs::write(root.join(file), "").expect("Failed to write file");
        }

        let files = metadata_files(root).expect("Failed to collect files");

        let relative: Vec<PathBuf> = files
            .iter()
            .map(|file| file.strip_prefix(root).expect("under root").to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("a.yaml"),
                PathBuf::from("b.yaml"),
                PathBuf::from("nested/c.yaml"),
            ]
        );
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = metadata_files(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, GeneratorError::FileSystem { .. }));
    }
}
