//! Step info assembly.
//!
//! [`assemble`] turns one parsed [`StepData`] into the flat [`StepInfo`]
//! record every step template renders against. Everything the templates need
//! is computed here; the templates themselves only format.

use serde::Serialize;
use serde_json::Value;

use crate::{
    dedupe::unique_by,
    defaults::default_literal,
    error::{GeneratorError, Result},
    metadata::{Alias, Container, ResourceReference, StepData, StepParameter, StepResources},
    naming::{self, ParameterType},
    resources::{output_resource_details, OutputResource},
};

/// A parameter with its type resolved and its default literal synthesised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterType,
    /// Go type of the options struct field
    pub go_type: &'static str,
    /// Cobra flag setter
    pub flag_type: &'static str,
    /// Go literal passed as the flag default
    pub default: String,
    /// The default literal reads the process environment
    pub reads_environment: bool,
    pub description: String,
    pub mandatory: bool,
    pub secret: bool,
    pub scope: Vec<String>,
    pub aliases: Vec<Alias>,
    pub resource_ref: Vec<ResourceReference>,
    /// Default as declared in the metadata file
    pub declared_default: Option<Value>,
}

impl ResolvedParameter {
    /// Resolves the type tag and default of a declared parameter.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::UnknownParameterType` naming the parameter if
    /// its type tag is not one of `bool`, `int`, `string` or `[]string`.
    pub fn resolve(parameter: &StepParameter) -> Result<Self> {
        let kind: ParameterType =
            parameter
                .kind
                .parse()
                .map_err(|_| GeneratorError::UnknownParameterType {
                    parameter: parameter.name.clone(),
                    kind: parameter.kind.clone(),
                })?;
        let default = default_literal(&parameter.name, kind, parameter.default.as_ref());

        Ok(Self {
            name: parameter.name.clone(),
            kind,
            go_type: kind.go_type(),
            flag_type: kind.flag_type(),
            default: default.literal,
            reads_environment: default.reads_environment,
            description: parameter.description.clone(),
            mandatory: parameter.mandatory,
            secret: parameter.secret,
            scope: parameter.scope.clone(),
            aliases: parameter.aliases.clone(),
            resource_ref: parameter.resource_ref.clone(),
            declared_default: parameter.default.clone(),
        })
    }
}

/// Render record of one step.
///
/// Every field is serialised, including empty ones, so templates rendered in
/// strict mode only fail on names that genuinely do not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInfo {
    pub step_name: String,
    /// `<Title>Command`
    pub cobra_cmd_func_name: String,
    /// `create<Title>Cmd`
    pub create_cmd_var: String,
    /// `add<Title>Flags`
    pub flags_func: String,
    pub short: String,
    pub long: String,
    /// Package alias of the shared command package, empty when unset
    pub export_prefix: String,
    /// `<export_prefix>.` or empty, prepended to shared identifiers
    pub qualifier: String,
    /// Parameters with duplicates collapsed to their first declaration
    pub parameters: Vec<ResolvedParameter>,
    /// Parameters exactly as declared, duplicates included
    pub declared_parameters: Vec<ResolvedParameter>,
    pub aliases: Vec<Alias>,
    /// Names of secret parameters in declaration order
    pub secrets: Vec<String>,
    /// Whether the generated command file must import `os`
    pub os_import: bool,
    pub containers: Vec<Container>,
    pub sidecars: Vec<Container>,
    /// Output resource declarations, for the metadata accessor
    pub outputs: Vec<StepResources>,
    /// Built output resources
    pub output_resources: Vec<OutputResource>,
}

/// Assembles the render record for a step.
///
/// ```rust
/// use stepgen_core::{metadata::StepData, step_info::assemble};
///
/// let step = StepData::from_yaml(
///     r#"
/// metadata:
///   name: mavenBuild
/// spec:
///   inputs:
///     params:
///       - name: goals
///         type: "[]string"
/// "#,
/// )
/// .unwrap();
///
/// let info = assemble(&step, Some("piper")).unwrap();
/// assert_eq!(info.cobra_cmd_func_name, "MavenBuildCommand");
/// assert_eq!(info.qualifier, "piper.");
/// assert_eq!(info.parameters[0].default, "[]string{}");
/// ```
///
/// # Errors
///
/// Returns `GeneratorError::InvalidStepName` if the step name is not a Go
/// identifier, `GeneratorError::UnknownParameterType` if any declared parameter
/// has an unknown type and `GeneratorError::MalformedResource` (or a render
/// error) if an output resource cannot be built.
pub fn assemble(step: &StepData, export_prefix: Option<&str>) -> Result<StepInfo> {
    let step_name = step.metadata.name.clone();
    if !naming::is_identifier(&step_name) {
        return Err(GeneratorError::InvalidStepName { name: step_name });
    }
    let title = naming::title(&step_name);

    let declared_parameters = step
        .spec
        .inputs
        .parameters
        .iter()
        .map(ResolvedParameter::resolve)
        .collect::<Result<Vec<_>>>()?;
    let parameters = unique_by(declared_parameters.iter().cloned(), |parameter| {
        parameter.name.clone()
    });

    let output_resources = output_resource_details(step)?;

    let secrets = parameters
        .iter()
        .filter(|parameter| parameter.secret)
        .map(|parameter| parameter.name.clone())
        .collect();
    let os_import = parameters.iter().any(|parameter| parameter.reads_environment);

    let export_prefix = export_prefix.unwrap_or_default().to_string();
    let qualifier = if export_prefix.is_empty() {
        String::new()
    } else {
        format!("{export_prefix}.")
    };

    Ok(StepInfo {
        cobra_cmd_func_name: format!("{title}Command"),
        create_cmd_var: format!("create{title}Cmd"),
        flags_func: format!("add{title}Flags"),
        step_name,
        short: step.metadata.description.clone(),
        long: step.metadata.long_description.clone(),
        export_prefix,
        qualifier,
        parameters,
        declared_parameters,
        aliases: step.metadata.aliases.clone(),
        secrets,
        os_import,
        containers: step.spec.containers.clone(),
        sidecars: step.spec.sidecars.clone(),
        outputs: step.spec.outputs.resources.clone(),
        output_resources,
    })
}
