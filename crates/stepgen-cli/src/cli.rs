//! Command execution for the `stepgen` binary.
//!
//! Arguments are parsed with clap into [`GenerateArgs`] and converted into the
//! core's [`GenerateSteps`], keeping clap out of the core crate:
//!
//! ```text
//! User Input → GenerateArgs (clap) → GenerateSteps → handle_generate_steps
//! ```

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use schemars::schema_for;
use stepgen_core::{
    handle_generate_steps, params::DEFAULT_METADATA_DIR, GenerateSteps, StepData,
};

use crate::renderer::TerminalRenderer;

/// Where to read metadata from and where to write the generated sources.
#[derive(Args)]
pub struct GenerateArgs {
    /// Directory searched recursively for `.yaml` metadata files
    #[arg(long, default_value = DEFAULT_METADATA_DIR)]
    pub metadata_dir: String,

    /// Directory the Go sources are written to. Defaults to ./cmd
    #[arg(long)]
    pub target_dir: Option<String>,

    /// Package alias under which the generated code reaches shared
    /// identifiers of the command package
    #[arg(long)]
    pub export_prefix: Option<String>,
}

impl From<GenerateArgs> for GenerateSteps {
    fn from(val: GenerateArgs) -> Self {
        GenerateSteps {
            metadata_dir: val.metadata_dir,
            target_dir: val.target_dir,
            export_prefix: val.export_prefix,
        }
    }
}

/// Runs CLI commands and renders their output.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Generate all steps and print the report.
    pub fn generate(&self, params: &GenerateSteps) -> Result<()> {
        let report = handle_generate_steps(params).with_context(|| {
            format!("Failed to generate steps from {}", params.metadata_dir)
        })?;
        info!("Generated {} step(s)", report.steps.len());
        self.renderer.render(&report.to_string())
    }

    /// Print the JSON schema of a metadata file.
    pub fn print_schema(&self) -> Result<()> {
        let schema = schema_for!(StepData);
        let json =
            serde_json::to_string_pretty(&schema).context("Failed to serialize metadata schema")?;
        println!("{json}");
        Ok(())
    }
}
