//! Entry points used by interface layers.
//!
//! A handler takes plain parameters from [`crate::params`], configures the
//! [`Generator`](crate::Generator) and returns structured data the interface
//! formats itself:
//!
//! ```text
//! Interface → Handler → GeneratorBuilder → Generator → GenerationReport
//! ```

use log::info;

use crate::{
    error::Result,
    generator::GeneratorBuilder,
    params::GenerateSteps,
    report::GenerationReport,
};

/// Handle a complete generation run.
///
/// # Examples
///
/// ```rust,no_run
/// # use stepgen_core::{handle_generate_steps, params::GenerateSteps};
/// let params = GenerateSteps {
///     metadata_dir: "./resources/metadata".to_string(),
///     target_dir: Some("./cmd".to_string()),
///     export_prefix: None,
/// };
/// let report = handle_generate_steps(&params)?;
/// println!("{report}");
/// # Result::<(), stepgen_core::GeneratorError>::Ok(())
/// ```
///
/// # Errors
///
/// Returns the first error of the run, see
/// [`Generator::process_meta_files`](crate::Generator::process_meta_files).
pub fn handle_generate_steps(params: &GenerateSteps) -> Result<GenerationReport> {
    let generator = GeneratorBuilder::new()
        .with_target_dir(params.target_dir.as_ref())
        .with_export_prefix(params.export_prefix.clone())
        .build()?;

    info!(
        "Generating steps from {} into {}",
        params.metadata_dir,
        generator.target_dir().display()
    );
    generator.generate_from_dir(&params.metadata_dir)
}
