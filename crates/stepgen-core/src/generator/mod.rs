//! Generation orchestrator.
//!
//! The [`Generator`] is the only component with side effects. For every
//! metadata file, in the given order, it reads and assembles the step, renders
//! the step artifacts and writes them into the target directory:
//!
//! | file | template | idempotence |
//! |---|---|---|
//! | `<step>_generated.go` | command definition | always overwritten |
//! | `<step>_generated_test.go` | command smoke test | always overwritten |
//! | `<step>.go` | implementation stub | only created if absent |
//! | `<step>_test.go` | implementation test stub | only created if absent |
//!
//! After all files, `metadata_generated.go` maps every processed step name to
//! its metadata accessor. The first error stops the run; files written before
//! it stay on disk.
//!
//! ```rust,no_run
//! use stepgen_core::GeneratorBuilder;
//!
//! # fn example() -> stepgen_core::Result<()> {
//! let generator = GeneratorBuilder::new()
//!     .with_target_dir(Some("./cmd"))
//!     .build()?;
//! let report = generator.generate_from_dir("./resources/metadata")?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

mod builder;
mod discovery;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Serialize;

pub use builder::GeneratorBuilder;
pub use discovery::metadata_files;

use crate::{
    error::{IoResultExt, Result},
    metadata::StepData,
    render::{render, FunctionTable},
    report::{ArtifactStatus, GenerationReport},
    step_info::{assemble, StepInfo},
    templates::{
        METADATA_GENERATED_FILE_NAME, METADATA_GENERATED_TEMPLATE, STEP_GO_IMPLEMENTATION_TEMPLATE,
        STEP_GO_IMPLEMENTATION_TEST_TEMPLATE, STEP_GO_TEMPLATE, STEP_TEST_GO_TEMPLATE,
    },
};

/// Write policy of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idempotence {
    /// Rewritten on every run
    AlwaysOverwrite,

    /// Written only when the target path does not exist yet
    CreateIfAbsent,
}

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: Vec<u8>,
    pub idempotence: Idempotence,
}

impl GeneratedArtifact {
    /// Writes the content to `path` under the artifact's write policy.
    ///
    /// A `CreateIfAbsent` artifact whose path already exists is left alone
    /// and reported as [`ArtifactStatus::Kept`].
    pub fn write(&self) -> Result<ArtifactStatus> {
        if self.idempotence == Idempotence::CreateIfAbsent && self.path.exists() {
            debug!("Keeping existing {}", self.path.display());
            return Ok(ArtifactStatus::Kept);
        }
        fs::write(&self.path, &self.content).fs_context(&self.path)?;
        Ok(ArtifactStatus::Written)
    }
}

/// Template source, helper table and write policy of one step artifact.
struct ArtifactKind {
    suffix: &'static str,
    template: &'static str,
    table: FunctionTable,
    idempotence: Idempotence,
}

const STEP_ARTIFACTS: [ArtifactKind; 4] = [
    ArtifactKind {
        suffix: "_generated.go",
        template: STEP_GO_TEMPLATE,
        table: FunctionTable::Step,
        idempotence: Idempotence::AlwaysOverwrite,
    },
    ArtifactKind {
        suffix: "_generated_test.go",
        template: STEP_TEST_GO_TEMPLATE,
        table: FunctionTable::Step,
        idempotence: Idempotence::AlwaysOverwrite,
    },
    ArtifactKind {
        suffix: ".go",
        template: STEP_GO_IMPLEMENTATION_TEMPLATE,
        table: FunctionTable::Implementation,
        idempotence: Idempotence::CreateIfAbsent,
    },
    ArtifactKind {
        suffix: "_test.go",
        template: STEP_GO_IMPLEMENTATION_TEST_TEMPLATE,
        table: FunctionTable::Implementation,
        idempotence: Idempotence::CreateIfAbsent,
    },
];

#[derive(Serialize)]
struct Registry<'a> {
    steps: &'a [String],
}

/// Generates Go step sources from metadata files.
#[derive(Debug, Clone)]
pub struct Generator {
    target_dir: PathBuf,
    export_prefix: Option<String>,
}

impl Generator {
    /// Create a new generator writing into `target_dir`.
    ///
    /// The directory must exist; [`GeneratorBuilder::build`] creates it.
    pub fn new(target_dir: PathBuf, export_prefix: Option<String>) -> Self {
        Self {
            target_dir,
            export_prefix,
        }
    }

    /// Directory the generated files are written to.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Package alias the generated code uses for shared identifiers.
    pub fn export_prefix(&self) -> Option<&str> {
        self.export_prefix.as_deref()
    }

    /// Discovers the metadata files below `metadata_dir` and processes them.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::FileSystem` if the directory cannot be walked,
    /// otherwise any error of [`Generator::process_meta_files`].
    pub fn generate_from_dir(&self, metadata_dir: impl AsRef<Path>) -> Result<GenerationReport> {
        let files = metadata_files(metadata_dir.as_ref())?;
        info!(
            "Found {} metadata file(s) in {}",
            files.len(),
            metadata_dir.as_ref().display()
        );
        self.process_meta_files(&files)
    }

    /// Generates the step sources for every file, then the registry.
    ///
    /// # Errors
    ///
    /// Stops at the first file that cannot be read, parsed, assembled,
    /// rendered or written and returns its error.
    pub fn process_meta_files<P: AsRef<Path>>(&self, files: &[P]) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        for file in files {
            let step_name = self.process_meta_file(file.as_ref(), &mut report)?;
            report.steps.push(step_name);
        }

        self.write_registry(&mut report)?;
        Ok(report)
    }

    /// Generates the artifacts of one metadata file and returns its step name.
    fn process_meta_file(&self, file: &Path, report: &mut GenerationReport) -> Result<String> {
        info!("Reading file {}", file.display());
        let step = StepData::read(file)?;
        let info = assemble(&step, self.export_prefix.as_deref())?;
        info!("Step name: {}", info.step_name);

        for kind in &STEP_ARTIFACTS {
            self.emit(&info, kind, report)?;
        }

        Ok(info.step_name)
    }

    fn emit(&self, info: &StepInfo, kind: &ArtifactKind, report: &mut GenerationReport) -> Result<()> {
        let file_name = format!("{}{}", info.step_name, kind.suffix);
        let artifact = GeneratedArtifact {
            content: render(info, &file_name, kind.template, kind.table)?,
            path: self.target_dir.join(&file_name),
            idempotence: kind.idempotence,
        };
        let status = artifact.write()?;
        report.record(artifact.path, status);
        Ok(())
    }

    fn write_registry(&self, report: &mut GenerationReport) -> Result<()> {
        let record = Registry {
            steps: &report.steps,
        };
        let artifact = GeneratedArtifact {
            path: self.target_dir.join(METADATA_GENERATED_FILE_NAME),
            content: render(
                &record,
                METADATA_GENERATED_FILE_NAME,
                METADATA_GENERATED_TEMPLATE,
                FunctionTable::Empty,
            )?,
            idempotence: Idempotence::AlwaysOverwrite,
        };
        let status = artifact.write()?;
        info!("Wrote {}", artifact.path.display());
        report.record(artifact.path, status);
        Ok(())
    }
}
