//! Metric output resources (`influx`).

use serde::Serialize;

use super::{ensure_identifier, struct_name};
use crate::{
    error::Result,
    metadata::StepResources,
    naming,
    render::{render_string, FunctionTable},
    templates::METRIC_STRUCT_TEMPLATE,
};

const INFLUX_FIELD: &str = "InfluxField";
const INFLUX_TAG: &str = "InfluxTag";

/// Metric resource of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricResource {
    pub name: String,
    pub step_name: String,
    pub measurements: Vec<Measurement>,
}

/// A measurement with its fields and tags in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    pub name: String,
    pub fields: Vec<MetricField>,
    /// Tag names; tags are always strings
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricField {
    pub name: String,
    /// Go type of the field
    pub kind: String,
}

#[derive(Debug, Serialize)]
struct MemberView {
    field: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct MeasurementView<'a> {
    name: &'a str,
    fields: Vec<MemberView>,
    tags: Vec<MemberView>,
}

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    measurement: &'a str,
    val_type: &'static str,
    name: &'a str,
    accessor: String,
}

#[derive(Debug, Serialize)]
struct StructView<'a> {
    struct_name: String,
    measurements: Vec<MeasurementView<'a>>,
    entries: Vec<EntryView<'a>>,
}

impl MetricResource {
    /// Builds the resource from its metadata declaration. Every declared
    /// parameter is one measurement.
    pub fn from_spec(step_name: &str, resource: &StepResources) -> Self {
        let measurements = resource
            .parameters
            .iter()
            .map(|measurement| Measurement {
                name: measurement.name.clone(),
                fields: measurement
                    .fields
                    .iter()
                    .map(|field| MetricField {
                        name: field.name.clone(),
                        kind: naming::resource_field_type(field.kind.as_deref()),
                    })
                    .collect(),
                tags: measurement.tags.iter().map(|tag| tag.name.clone()).collect(),
            })
            .collect();

        Self {
            name: resource.name.clone(),
            step_name: step_name.to_string(),
            measurements,
        }
    }

    /// Name of the generated struct.
    pub fn struct_name(&self) -> String {
        struct_name(&self.step_name, &self.name)
    }

    /// Renders the struct definition and its `persist` method.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::MalformedResource` if a measurement, field or
    /// tag does not form a valid Go identifier.
    pub fn struct_string(&self) -> Result<String> {
        let mut measurements = Vec::with_capacity(self.measurements.len());
        let mut entries = Vec::new();

        for measurement in &self.measurements {
            ensure_identifier(&self.name, "measurement", &measurement.name)?;

            let mut fields = Vec::with_capacity(measurement.fields.len());
            for field in &measurement.fields {
                let member = naming::golang_name(&field.name);
                ensure_identifier(&self.name, "field", &member)?;
                entries.push(EntryView {
                    measurement: &measurement.name,
                    val_type: INFLUX_FIELD,
                    name: &field.name,
                    accessor: format!("{}.fields.{member}", measurement.name),
                });
                fields.push(MemberView {
                    field: member,
                    kind: field.kind.clone(),
                });
            }

            let mut tags = Vec::with_capacity(measurement.tags.len());
            for tag in &measurement.tags {
                let member = naming::golang_name(tag);
                ensure_identifier(&self.name, "tag", &member)?;
                entries.push(EntryView {
                    measurement: &measurement.name,
                    val_type: INFLUX_TAG,
                    name: tag,
                    accessor: format!("{}.tags.{member}", measurement.name),
                });
                tags.push(MemberView {
                    field: member,
                    kind: "string".to_string(),
                });
            }

            measurements.push(MeasurementView {
                name: &measurement.name,
                fields,
                tags,
            });
        }

        let view = StructView {
            struct_name: self.struct_name(),
            measurements,
            entries,
        };

        render_string(&view, "metricResource", METRIC_STRUCT_TEMPLATE, FunctionTable::Empty)
    }
}
