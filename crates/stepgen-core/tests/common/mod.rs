use std::{fs, path::PathBuf};

use stepgen_core::{Generator, GeneratorBuilder};
use tempfile::TempDir;

/// Scratch metadata and target directories for one test.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub metadata_dir: PathBuf,
    pub target_dir: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let metadata_dir = temp_dir.path().join("resources").join("metadata");
        let target_dir = temp_dir.path().join("cmd");
        fs::create_dir_all(&metadata_dir).expect("Failed to create metadata dir");
        Self {
            temp_dir,
            metadata_dir,
            target_dir,
        }
    }

    /// Writes a metadata file relative to the metadata directory.
    pub fn add_metadata(&self, relative: &str, content: &str) {
        let path = self.metadata_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create metadata subdir");
        }
        fs::write(path, content).expect("Failed to write metadata");
    }

    pub fn generator(&self, export_prefix: Option<&str>) -> Generator {
        GeneratorBuilder::new()
            .with_target_dir(Some(&self.target_dir))
            .with_export_prefix(export_prefix.map(str::to_string))
            .build()
            .expect("Failed to create generator")
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.target_dir.join(name)).expect("Failed to read generated file")
    }
}
