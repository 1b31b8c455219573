//! Template rendering.
//!
//! Every generated file goes through [`render`]: a fresh handlebars registry
//! is created per call, configured for code generation (strict mode, no HTML
//! escaping), given a [`FunctionTable`] and used to render exactly one
//! template against one serialisable record.

use handlebars::{
    handlebars_helper, no_escape, Context, Handlebars, Helper, HelperResult, Output,
    RenderContext, RenderErrorReason,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    dedupe::unique_by,
    error::{GeneratorError, Result},
    naming,
};

/// Set of helper functions made available to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionTable {
    /// No helpers, for templates working on precomputed records
    Empty,
    /// `golangName`, `flagType`, `longName`, `title` and `uniqueName`
    Step,
    /// `title` and `uniqueName`
    Implementation,
}

impl FunctionTable {
    /// Registers the helpers of this table on `registry`.
    fn install(self, registry: &mut Handlebars<'_>) {
        match self {
            FunctionTable::Empty => {}
            FunctionTable::Step => {
                registry.register_helper("golangName", Box::new(golang_name_helper));
                registry.register_helper("flagType", Box::new(flag_type_helper));
                registry.register_helper("longName", Box::new(long_name_helper));
                FunctionTable::Implementation.install(registry);
            }
            FunctionTable::Implementation => {
                registry.register_helper("title", Box::new(title_helper));
                registry.register_helper("uniqueName", Box::new(unique_name_helper));
            }
        }
    }
}

/// Renders `source` against `record` and returns the generated bytes.
///
/// # Errors
///
/// Returns `GeneratorError::Template` if the template does not compile and
/// `GeneratorError::Render` if rendering fails, for example because the
/// template references a field the record does not have or a helper rejects
/// its input.
pub fn render<T: Serialize>(
    record: &T,
    name: &str,
    source: &str,
    table: FunctionTable,
) -> Result<Vec<u8>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(no_escape);
    table.install(&mut registry);

    registry
        .register_template_string(name, source)
        .map_err(|source| GeneratorError::Template {
            name: name.to_string(),
            source: Box::new(source),
        })?;

    let generated = registry
        .render(name, record)
        .map_err(|source| GeneratorError::Render {
            name: name.to_string(),
            source: Box::new(source),
        })?;

    Ok(generated.into_bytes())
}

/// Renders into a `String`, for templates producing fragments of other files.
pub(crate) fn render_string<T: Serialize>(
    record: &T,
    name: &str,
    source: &str,
    table: FunctionTable,
) -> Result<String> {
    render(record, name, source, table).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

// Handlebars helpers

handlebars_helper!(golang_name_helper: |name: str| naming::golang_name(name));
handlebars_helper!(long_name_helper: |long: str| naming::long_name(long));
handlebars_helper!(title_helper: |s: str| naming::title(s));
handlebars_helper!(unique_name_helper: |parameters: array| unique_by(
    parameters.iter().cloned(),
    |parameter: &Value| parameter.get("name").and_then(Value::as_str).map(str::to_owned)
));

fn flag_type_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    let flag = naming::flag_type(raw).map_err(RenderErrorReason::Other)?;
    out.write(flag)?;
    Ok(())
}
