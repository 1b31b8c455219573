//! Core library of the `stepgen` step code generator.
//!
//! The crate reads declarative step descriptions from YAML metadata files and
//! generates Go command sources, test sources, implementation stubs and an
//! aggregate metadata registry from them.
//!
//! # Pipeline
//!
//! ```text
//! metadata file ─▶ StepData ─▶ StepInfo ─▶ render ─▶ generated files
//!   (metadata)               (step_info)  (render,    (generator)
//!                                          templates)
//! ```
//!
//! - [`metadata`]: the step description model, parsed with `serde_yaml`
//! - [`naming`], [`dedupe`], [`defaults`]: pure helpers turning metadata names,
//!   types and defaults into Go source fragments
//! - [`resources`]: struct definitions for the output resources of a step
//! - [`step_info`]: the flat render record of one step
//! - [`render`], [`templates`]: template execution and the template sources
//! - [`generator`]: file discovery, idempotent emission and the registry
//! - [`report`]: what a run wrote or kept, formatted as markdown
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stepgen_core::GeneratorBuilder;
//!
//! # fn example() -> stepgen_core::Result<()> {
//! let generator = GeneratorBuilder::new()
//!     .with_target_dir(Some("./cmd"))
//!     .with_export_prefix(Some("piper".to_string()))
//!     .build()?;
//!
//! let report = generator.generate_from_dir("./resources/metadata")?;
//! for step in &report.steps {
//!     println!("Generated {step}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dedupe;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod metadata;
pub mod naming;
pub mod params;
pub mod render;
pub mod report;
pub mod resources;
pub mod step_info;
pub mod templates;

// Re-export commonly used types
pub use error::{GeneratorError, Result};
pub use generator::{GeneratedArtifact, Generator, GeneratorBuilder, Idempotence};
pub use handlers::handle_generate_steps;
pub use metadata::StepData;
pub use naming::ParameterType;
pub use params::GenerateSteps;
pub use render::FunctionTable;
pub use report::{ArtifactOutcome, ArtifactStatus, GenerationReport};
pub use step_info::{assemble, ResolvedParameter, StepInfo};
