//! Output resource declarations.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared step outputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepOutputs {
    #[serde(default)]
    pub resources: Vec<StepResources>,
}

/// One output resource. `kind` selects the builder; kinds the generator does
/// not know are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepResources {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "params", default)]
    pub parameters: Vec<ResourceParameter>,
}

/// Entry of an output resource.
///
/// For environment resources this is a (possibly `category/`-prefixed) value
/// name with an optional type. For metric resources it is a measurement with
/// its fields and tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResourceParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub fields: Vec<ResourceField>,
    #[serde(default)]
    pub tags: Vec<ResourceField>,
}

/// Field or tag of a measurement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResourceField {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
