//! Builder for creating and configuring Generator instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::Generator;
use crate::error::{IoResultExt, Result};

/// Target directory used when none is configured.
pub const DEFAULT_TARGET_DIR: &str = "./cmd";

/// Builder for creating and configuring Generator instances.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    target_dir: Option<PathBuf>,
    export_prefix: Option<String>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory generated files are written to.
    ///
    /// If not specified, uses `./cmd`.
    pub fn with_target_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.target_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the package alias of the shared command package.
    ///
    /// An empty prefix is treated as unset.
    pub fn with_export_prefix(mut self, prefix: Option<String>) -> Self {
        self.export_prefix = prefix.filter(|prefix| !prefix.is_empty());
        self
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::FileSystem` if the target directory cannot be
    /// created.
    pub fn build(self) -> Result<Generator> {
        let target_dir = self
            .target_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR));

        fs::create_dir_all(&target_dir).fs_context(&target_dir)?;

        Ok(Generator::new(target_dir, self.export_prefix))
    }
}
