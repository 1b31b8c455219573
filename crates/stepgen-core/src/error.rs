//! Error types for the step generator.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all generation operations.
///
/// Every variant is terminal for a generation run: the orchestrator never
/// recovers locally, it returns the first error to its caller.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Metadata file could not be parsed into a step description
    #[error("Failed to parse metadata file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Parameter declares a type the generator does not know
    #[error("Unknown parameter type '{kind}' for parameter '{parameter}'")]
    UnknownParameterType { parameter: String, kind: String },
    /// Step name cannot be used as a Go identifier and file name stem
    #[error("Invalid step name '{name}': expected a Go identifier")]
    InvalidStepName { name: String },
    /// Output resource entry cannot be turned into a struct definition
    #[error("Malformed output resource '{resource}': {reason}")]
    MalformedResource { resource: String, reason: String },
    /// Template source failed to compile
    #[error("Failed to parse template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },
    /// Template execution failed
    #[error("Failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Builder for creating malformed resource errors.
pub struct MalformedResourceBuilder {
    resource: String,
}

impl MalformedResourceBuilder {
    /// Create a new malformed resource error builder for a resource.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GeneratorError {
        GeneratorError::MalformedResource {
            resource: self.resource,
            reason: reason.into(),
        }
    }
}

impl GeneratorError {
    /// Creates a builder for malformed resource errors.
    pub fn malformed_resource(resource: impl Into<String>) -> MalformedResourceBuilder {
        MalformedResourceBuilder::new(resource)
    }
}

/// Extension trait attaching the offending path to I/O failures.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`GeneratorError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| GeneratorError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
