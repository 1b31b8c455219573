//! Output resource builders.
//!
//! A step may declare output resources that it fills at runtime and persists
//! afterwards. Each supported kind is turned into a Go struct definition with
//! a `persist` method:
//!
//! - [`ResourceKind::Environment`] (`piperEnvironment`): values grouped by
//!   category, see [`EnvironmentResource`]
//! - [`ResourceKind::Metric`] (`influx`): measurements with fields and tags,
//!   see [`MetricResource`]
//!
//! Resources of any other kind are skipped so that metadata declaring newer
//! kinds still generates.

mod environment;
mod metric;

use log::debug;
use serde::Serialize;

pub use environment::{EnvironmentParameter, EnvironmentResource};
pub use metric::{Measurement, MetricField, MetricResource};

use crate::{
    error::{GeneratorError, Result},
    metadata::StepData,
    naming,
};

/// Output resource kinds the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Environment,
    Metric,
}

impl ResourceKind {
    /// Resolves a metadata kind tag; `None` for kinds the generator does not
    /// know.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "piperEnvironment" => Some(ResourceKind::Environment),
            "influx" => Some(ResourceKind::Metric),
            _ => None,
        }
    }

    /// Metadata tag of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Environment => "piperEnvironment",
            ResourceKind::Metric => "influx",
        }
    }
}

/// A built output resource as consumed by the step templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputResource {
    /// Resource name, used as the Go variable name
    pub name: String,
    /// Name of the generated struct type
    pub object_name: String,
    /// Generated struct definition and `persist` method
    pub def: String,
}

/// Builds every supported output resource of a step, in declaration order.
///
/// # Errors
///
/// Returns `GeneratorError::MalformedResource` if a resource entry cannot be
/// turned into a struct definition.
pub fn output_resource_details(step: &StepData) -> Result<Vec<OutputResource>> {
    let step_name = &step.metadata.name;
    let mut output_resources = Vec::new();

    for resource in &step.spec.outputs.resources {
        let built = match ResourceKind::parse(&resource.kind) {
            Some(ResourceKind::Environment) => {
                let env = EnvironmentResource::from_spec(step_name, resource);
                OutputResource {
                    name: resource.name.clone(),
                    object_name: env.struct_name(),
                    def: env.struct_string()?,
                }
            }
            Some(ResourceKind::Metric) => {
                let metric = MetricResource::from_spec(step_name, resource);
                OutputResource {
                    name: resource.name.clone(),
                    object_name: metric.struct_name(),
                    def: metric.struct_string()?,
                }
            }
            None => {
                debug!(
                    "Skipping output resource '{}' of unsupported kind '{}'",
                    resource.name, resource.kind
                );
                continue;
            }
        };
        output_resources.push(built);
    }

    Ok(output_resources)
}

/// Name of the struct generated for a resource of a step.
fn struct_name(step_name: &str, resource_name: &str) -> String {
    format!("{step_name}{}", naming::title(resource_name))
}

/// Fails unless `name` is usable as a Go identifier.
fn ensure_identifier(resource: &str, what: &str, name: &str) -> Result<()> {
    if naming::is_identifier(name) {
        Ok(())
    } else {
        Err(GeneratorError::malformed_resource(resource)
            .with_reason(format!("{what} '{name}' is not a valid identifier")))
    }
}
