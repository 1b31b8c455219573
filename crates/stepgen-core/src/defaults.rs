//! Default value literals for generated flag definitions.

use serde_json::Value;

use crate::naming::ParameterType;

/// Go literal used as the default of a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultLiteral {
    pub literal: String,
    /// The literal reads the process environment, so the generated file
    /// must import `os`.
    pub reads_environment: bool,
}

impl DefaultLiteral {
    fn constant(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            reads_environment: false,
        }
    }
}

/// Synthesises the default literal of a parameter.
///
/// Without a declared default, strings read `PIPER_<name>` from the
/// environment and every other type gets its zero value. A declared default is
/// serialised for its type; a boolean default is `true` only for the literal
/// `true`.
///
/// ```rust
/// use serde_json::json;
/// use stepgen_core::{defaults::default_literal, naming::ParameterType};
///
/// let synthesised = default_literal("host", ParameterType::String, None);
/// assert_eq!(synthesised.literal, r#"os.Getenv("PIPER_host")"#);
/// assert!(synthesised.reads_environment);
///
/// let declared = default_literal("tags", ParameterType::StringList, Some(&json!(["a", 1])));
/// assert_eq!(declared.literal, "[]string{`a`, `1`}");
/// ```
pub fn default_literal(name: &str, kind: ParameterType, declared: Option<&Value>) -> DefaultLiteral {
    match (kind, declared) {
        (ParameterType::Bool, None) => DefaultLiteral::constant("false"),
        (ParameterType::Int, None) => DefaultLiteral::constant("0"),
        (ParameterType::String, None) => DefaultLiteral {
            literal: format!("os.Getenv(\"PIPER_{name}\")"),
            reads_environment: true,
        },
        (ParameterType::StringList, None) => DefaultLiteral::constant("[]string{}"),
        (ParameterType::Bool, Some(value)) => {
            DefaultLiteral::constant(if matches!(value, Value::Bool(true)) { "true" } else { "false" })
        }
        (ParameterType::Int, Some(value)) => DefaultLiteral::constant(value_as_text(value)),
        (ParameterType::String, Some(value)) => {
            DefaultLiteral::constant(format!("`{}`", value_as_text(value)))
        }
        (ParameterType::StringList, Some(value)) => DefaultLiteral::constant(string_list(value)),
    }
}

fn string_list(value: &Value) -> String {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().map(value_as_text).collect(),
        other => vec![value_as_text(other)],
    };
    if items.is_empty() {
        return "[]string{}".to_string();
    }
    format!("[]string{{`{}`}}", items.join("`, `"))
}

/// Formats any metadata value as plain text.
///
/// Strings are taken verbatim, sequences render as `[a b]` and mappings as
/// `map[k:v]` with keys in sorted order.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(value_as_text).collect();
            format!("[{}]", items.join(" "))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let entries: Vec<String> = entries
                .into_iter()
                .map(|(key, value)| format!("{key}:{}", value_as_text(value)))
                .collect();
            format!("map[{}]", entries.join(" "))
        }
    }
}
