use clap::Parser;

use crate::cli::GenerateArgs;

/// Generates Go step commands from YAML metadata files
///
/// Every `.yaml` file below the metadata directory describes one step. For
/// each step the generator writes `<step>_generated.go` and
/// `<step>_generated_test.go` (always regenerated) plus `<step>.go` and
/// `<step>_test.go` implementation stubs (only created when missing), and
/// finally `metadata_generated.go` listing all steps.
#[derive(Parser)]
#[command(version, about, name = "stepgen")]
pub struct Args {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Print the JSON schema of the metadata format and exit
    #[arg(long)]
    pub print_schema: bool,
}
