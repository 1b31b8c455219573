//! Name and type normalisation for generated Go code.
//!
//! All functions here are pure: the same input always yields the same output,
//! which keeps regenerated files byte-identical across runs.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Casing corrections applied in order before title-casing.
const GOLANG_REPLACEMENTS: [(&str, &str); 7] = [
    ("Api", "API"),
    ("api", "API"),
    ("Url", "URL"),
    ("Id", "ID"),
    ("Json", "JSON"),
    ("json", "JSON"),
    ("Tls", "TLS"),
];

/// Placeholder the metadata format uses for a missing resource field type.
const NIL_TYPE: &str = "<nil>";

/// Type-safe enumeration of parameter types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParameterType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "[]string")]
    StringList,
}

impl FromStr for ParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(ParameterType::Bool),
            "int" => Ok(ParameterType::Int),
            "string" => Ok(ParameterType::String),
            "[]string" => Ok(ParameterType::StringList),
            _ => Err(format!("Meta data type not set or not known: '{s}'")),
        }
    }
}

impl ParameterType {
    /// Metadata tag of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Bool => "bool",
            ParameterType::Int => "int",
            ParameterType::String => "string",
            ParameterType::StringList => "[]string",
        }
    }

    /// Go type of the options struct field.
    pub fn go_type(&self) -> &'static str {
        // Metadata tags are Go types already.
        self.as_str()
    }

    /// Name of the cobra flag setter for this type.
    ///
    /// ```rust
    /// use stepgen_core::naming::ParameterType;
    ///
    /// assert_eq!(ParameterType::StringList.flag_type(), "StringSliceVar");
    /// ```
    pub fn flag_type(&self) -> &'static str {
        match self {
            ParameterType::Bool => "BoolVar",
            ParameterType::Int => "IntVar",
            ParameterType::String => "StringVar",
            ParameterType::StringList => "StringSliceVar",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a flag type for a raw type tag, failing on unknown tags.
pub fn flag_type(raw: &str) -> Result<&'static str, String> {
    raw.parse::<ParameterType>().map(|kind| kind.flag_type())
}

/// Applies the acronym casing table without title-casing.
pub fn golang_acronyms(name: &str) -> String {
    GOLANG_REPLACEMENTS
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Canonical exported Go identifier for a raw metadata name.
///
/// ```rust
/// use stepgen_core::naming::golang_name;
///
/// assert_eq!(golang_name("apiEndpoint"), "APIEndpoint");
/// assert_eq!(golang_name("integrationFlowId"), "IntegrationFlowID");
/// assert_eq!(golang_name("oAuthTokenProviderUrl"), "OAuthTokenProviderURL");
/// ```
pub fn golang_name(name: &str) -> String {
    title(&golang_acronyms(name))
}

/// Upper-cases the first letter of every word.
///
/// A word starts at the beginning of the string or after any character that
/// is neither alphanumeric nor an underscore.
pub fn title(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    result
}

/// Escapes backticks so the text can sit inside a Go raw string literal.
pub fn long_name(long: &str) -> String {
    long.replace('`', "` + \"`\" + `").trim().to_string()
}

/// Go type of an output resource field, `string` when unset.
pub fn resource_field_type(kind: Option<&str>) -> String {
    match kind {
        None | Some("") | Some(NIL_TYPE) => "string".to_string(),
        Some(kind) => kind.to_string(),
    }
}

/// Whether `name` is usable as a Go identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golang_name_table() {
        assert_eq!(golang_name("apiKey"), "APIKey");
        assert_eq!(golang_name("serviceApi"), "ServiceAPI");
        assert_eq!(golang_name("serverUrl"), "ServerURL");
        assert_eq!(golang_name("artifactId"), "ArtifactID");
        assert_eq!(golang_name("configJson"), "ConfigJSON");
        assert_eq!(golang_name("jsonPath"), "JSONPath");
        assert_eq!(golang_name("useTls"), "UseTLS");
        assert_eq!(golang_name("plain"), "Plain");
    }

    #[test]
    fn test_golang_name_is_deterministic() {
        let first = golang_name("integrationFlowId");
        let second = golang_name("integrationFlowId");
        assert_eq!(first, second);
    }

    #[test]
    fn test_title_words() {
        assert_eq!(title("mavenBuild"), "MavenBuild");
        assert_eq!(title("hello world"), "Hello World");
        assert_eq!(title("snake_case"), "Snake_case");
        assert_eq!(title("a.b-c"), "A.B-C");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_long_name_escapes_backticks() {
        assert_eq!(long_name("  use `mvn`\n"), "use ` + \"`\" + `mvn` + \"`\" + `");
        assert_eq!(long_name("plain"), "plain");
    }

    #[test]
    fn test_parameter_type_round_trip_tags() {
        for tag in ["bool", "int", "string", "[]string"] {
            let kind: ParameterType = tag.parse().expect("known tag");
            assert_eq!(kind.as_str(), tag);
        }
        assert!("float".parse::<ParameterType>().is_err());
    }

    #[test]
    fn test_flag_type_mapping() {
        assert_eq!(flag_type("bool"), Ok("BoolVar"));
        assert_eq!(flag_type("int"), Ok("IntVar"));
        assert_eq!(flag_type("string"), Ok("StringVar"));
        assert_eq!(flag_type("[]string"), Ok("StringSliceVar"));
        assert!(flag_type("map").unwrap_err().contains("map"));
    }

    #[test]
    fn test_resource_field_type_defaults() {
        assert_eq!(resource_field_type(None), "string");
        assert_eq!(resource_field_type(Some("")), "string");
        assert_eq!(resource_field_type(Some("<nil>")), "string");
        assert_eq!(resource_field_type(Some("bool")), "bool");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Build"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
    }
}
