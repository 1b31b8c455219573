//! Environment output resources (`piperEnvironment`).

use serde::Serialize;

use super::{ensure_identifier, struct_name};
use crate::{
    error::Result,
    metadata::StepResources,
    naming,
    render::{render_string, FunctionTable},
    templates::ENVIRONMENT_STRUCT_TEMPLATE,
};

/// Environment resource of a step: values optionally grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentResource {
    pub name: String,
    pub step_name: String,
    /// Values in declaration order
    pub parameters: Vec<EnvironmentParameter>,
    /// Distinct non-empty categories in first-seen order
    pub categories: Vec<String>,
}

/// One value of an environment resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentParameter {
    /// Category prefix, empty for top-level values
    pub category: String,
    /// Field name, with nested path segments joined by `_`
    pub name: String,
    /// Go type of the field
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
struct FieldView<'a> {
    category: &'a str,
    name: &'a str,
    field: String,
    #[serde(rename = "type")]
    kind: &'a str,
    accessor: String,
}

#[derive(Debug, Serialize)]
struct CategoryView<'a> {
    name: &'a str,
    parameters: Vec<FieldView<'a>>,
}

#[derive(Debug, Serialize)]
struct StructView<'a> {
    struct_name: String,
    parameters: Vec<FieldView<'a>>,
    uncategorized: Vec<FieldView<'a>>,
    categories: Vec<CategoryView<'a>>,
}

impl EnvironmentResource {
    /// Creates an empty resource owned by `step_name`.
    pub fn new(step_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            step_name: step_name.into(),
            ..Default::default()
        }
    }

    /// Builds the resource from its metadata declaration.
    pub fn from_spec(step_name: &str, resource: &StepResources) -> Self {
        let mut env = Self::new(step_name, resource.name.as_str());
        for parameter in &resource.parameters {
            env.add_parameter(&parameter.name, parameter.kind.as_deref());
        }
        env
    }

    /// Adds a value declared as `category/field` or `field`.
    ///
    /// ```rust
    /// use stepgen_core::resources::EnvironmentResource;
    ///
    /// let mut env = EnvironmentResource::new("mavenBuild", "commonPipelineEnvironment");
    /// env.add_parameter("custom/build/number", Some("int"));
    ///
    /// assert_eq!(env.categories, vec!["custom"]);
    /// assert_eq!(env.parameters[0].name, "build_number");
    /// assert_eq!(env.parameters[0].kind, "int");
    /// ```
    pub fn add_parameter(&mut self, declared: &str, kind: Option<&str>) {
        let (category, name) = match declared.split_once('/') {
            Some((category, rest)) => (category.to_string(), rest.replace('/', "_")),
            None => (String::new(), declared.to_string()),
        };
        if !category.is_empty() && !self.categories.contains(&category) {
            self.categories.push(category.clone());
        }
        self.parameters.push(EnvironmentParameter {
            category,
            name,
            kind: naming::resource_field_type(kind),
        });
    }

    /// Name of the generated struct.
    pub fn struct_name(&self) -> String {
        struct_name(&self.step_name, &self.name)
    }

    /// Renders the struct definition and its `persist` method.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::MalformedResource` if a category or field does
    /// not form a valid Go identifier.
    pub fn struct_string(&self) -> Result<String> {
        for category in &self.categories {
            ensure_identifier(&self.name, "category", category)?;
        }

        let mut fields = Vec::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            let field = naming::golang_name(&parameter.name);
            ensure_identifier(&self.name, "field", &field)?;
            let accessor = if parameter.category.is_empty() {
                field.clone()
            } else {
                format!("{}.{}", parameter.category, field)
            };
            fields.push(FieldView {
                category: &parameter.category,
                name: &parameter.name,
                field,
                kind: &parameter.kind,
                accessor,
            });
        }

        let view = StructView {
            struct_name: self.struct_name(),
            uncategorized: fields
                .iter()
                .filter(|field| field.category.is_empty())
                .cloned()
                .collect(),
            categories: self
                .categories
                .iter()
                .map(|category| CategoryView {
                    name: category,
                    parameters: fields
                        .iter()
                        .filter(|field| field.category == category)
                        .cloned()
                        .collect(),
                })
                .collect(),
            parameters: fields,
        };

        render_string(
            &view,
            "environmentResource",
            ENVIRONMENT_STRUCT_TEMPLATE,
            FunctionTable::Empty,
        )
    }
}
