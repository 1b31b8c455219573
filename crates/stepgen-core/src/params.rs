//! Parameter structures for generation runs.
//!
//! Interface layers (the CLI) define their own framework-specific argument
//! types and convert them into these plain structures, so the core stays free
//! of CLI dependencies.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct GenerateArgs {
//!     #[arg(long, default_value = "./resources/metadata")]
//!     pub metadata_dir: String,
//!     // ...
//! }
//!
//! impl From<GenerateArgs> for GenerateSteps {
//!     fn from(args: GenerateArgs) -> Self {
//!         GenerateSteps {
//!             metadata_dir: args.metadata_dir,
//!             target_dir: args.target_dir,
//!             export_prefix: args.export_prefix,
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata directory used when none is given.
pub const DEFAULT_METADATA_DIR: &str = "./resources/metadata";

/// Parameters for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateSteps {
    /// Directory searched recursively for `.yaml` metadata files
    pub metadata_dir: String,
    /// Directory the Go sources are written to, `./cmd` when unset
    #[serde(default)]
    pub target_dir: Option<String>,
    /// Package alias of the shared command package
    #[serde(default)]
    pub export_prefix: Option<String>,
}

impl Default for GenerateSteps {
    fn default() -> Self {
        Self {
            metadata_dir: DEFAULT_METADATA_DIR.to_string(),
            target_dir: None,
            export_prefix: None,
        }
    }
}
