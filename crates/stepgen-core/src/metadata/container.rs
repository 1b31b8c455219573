//! Container and sidecar declarations, passed through to the generated
//! metadata accessor.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A container the step runs in, or a sidecar next to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub env: Vec<NameValue>,
    #[serde(default)]
    pub working_dir: String,
    #[serde(default)]
    pub options: Vec<NameValue>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Name/value pair used for environment variables, options and condition
/// parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NameValue {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Activation condition of a container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub condition_ref: String,
    #[serde(default)]
    pub params: Vec<NameValue>,
}
