//! Step metadata as read from YAML files.
//!
//! The types in this module mirror the metadata document one to one and carry
//! no generation logic. Unknown keys are ignored so that metadata written for
//! newer generators still parses.
//!
//! ```rust
//! use stepgen_core::metadata::StepData;
//!
//! let step = StepData::from_yaml(
//!     r#"
//! metadata:
//!   name: helloWorld
//!   description: Prints a greeting
//! spec:
//!   inputs:
//!     params:
//!       - name: greeting
//!         type: string
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(step.metadata.name, "helloWorld");
//! assert_eq!(step.spec.inputs.parameters[0].kind, "string");
//! ```

mod container;
mod outputs;
mod parameter;

use std::{fs, path::Path};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use container::{Condition, Container, NameValue};
pub use outputs::{ResourceField, ResourceParameter, StepOutputs, StepResources};
pub use parameter::{Alias, ResourceReference, StepParameter};

use crate::error::{GeneratorError, IoResultExt, Result};

/// A complete step description, one per metadata file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepData {
    /// Identity and documentation of the step
    pub metadata: StepMetadata,
    /// Inputs, execution environment and outputs
    #[serde(default)]
    pub spec: StepSpec,
}

/// Identity and documentation of a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepMetadata {
    /// Step name, used verbatim as the Go function name
    pub name: String,
    /// Alternative names under which the step is known
    #[serde(default)]
    pub aliases: Vec<Alias>,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Multi-line description shown in command help
    #[serde(default)]
    pub long_description: String,
}

/// Specification part of a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepSpec {
    #[serde(default)]
    pub inputs: StepInputs,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub sidecars: Vec<Container>,
    #[serde(default)]
    pub outputs: StepOutputs,
}

/// Declared step inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepInputs {
    /// Parameters in declaration order, duplicates included
    #[serde(default, rename = "params")]
    pub parameters: Vec<StepParameter>,
}

impl StepData {
    /// Parses a step description from YAML text.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Reads and parses the metadata file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::FileSystem` if the file cannot be read and
    /// `GeneratorError::Parse` if its content is not a valid step description.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).fs_context(path)?;
        Self::from_yaml(&content).map_err(|source| GeneratorError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests;
