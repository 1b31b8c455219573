//! Input parameter declarations.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Alternative name of a step or parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Alias {
    pub name: String,
    #[serde(default)]
    pub deprecated: bool,
}

/// A declared step parameter.
///
/// The type is kept as the raw tag from the metadata file. It is validated
/// when the step info is assembled so the error can name the parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepParameter {
    pub name: String,
    /// Raw type tag: `bool`, `int`, `string` or `[]string`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub secret: bool,
    /// Configuration scopes the parameter may be set in
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    /// Sources the value may be resolved from at runtime
    #[serde(default)]
    pub resource_ref: Vec<ResourceReference>,
    /// Declared default; `None` when absent or `null`
    #[serde(default)]
    pub default: Option<Value>,
}

/// Reference to a runtime resource providing a parameter value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResourceReference {
    pub name: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
