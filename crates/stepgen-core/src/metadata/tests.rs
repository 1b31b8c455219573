//! Tests for the metadata module.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use super::*;

const FULL_STEP: &str = r#"
metadata:
  name: integrationArtifactIntegrationTest
  aliases:
    - name: cpiIntegrationTest
      deprecated: true
  description: Test the service endpoint of your iFlow
  longDescription: |
    With this step you can test your integration flow.
spec:
  inputs:
    params:
      - name: username
        type: string
        description: User to authenticate with
        scope: [PARAMETERS, STAGES, STEPS]
        mandatory: true
        secret: true
        resourceRef:
          - name: cpiCredentialsId
            type: secret
            param: username
      - name: verbose
        type: bool
        default: true
      - name: retries
        type: int
        default: null
  containers:
    - name: node
      image: node:lts
      workingDir: /home/node
      env:
        - name: HOME
          value: /home/node
  outputs:
    resources:
      - name: commonPipelineEnvironment
        type: piperEnvironment
        params:
          - name: custom/iFlowServiceEndpoint
"#;

#[test]
fn test_parse_full_step() {
    let step = StepData::from_yaml(FULL_STEP).expect("Failed to parse step");

    assert_eq!(step.metadata.name, "integrationArtifactIntegrationTest");
    assert_eq!(step.metadata.aliases.len(), 1);
    assert!(step.metadata.aliases[0].deprecated);
    assert!(step
        .metadata
        .long_description
        .starts_with("With this step"));

    let params = &step.spec.inputs.parameters;
    assert_eq!(params.len(), 3);
    assert_eq!(params[0].kind, "string");
    assert_eq!(params[0].scope, vec!["PARAMETERS", "STAGES", "STEPS"]);
    assert_eq!(params[0].resource_ref[0].kind.as_deref(), Some("secret"));
    assert_eq!(params[0].resource_ref[0].param.as_deref(), Some("username"));
    assert_eq!(params[1].default, Some(json!(true)));
    assert_eq!(params[2].default, None);

    assert_eq!(step.spec.containers[0].working_dir, "/home/node");
    assert_eq!(step.spec.containers[0].env[0].name, "HOME");
    assert_eq!(step.spec.outputs.resources[0].kind, "piperEnvironment");
    assert_eq!(
        step.spec.outputs.resources[0].parameters[0].name,
        "custom/iFlowServiceEndpoint"
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let step = StepData::from_yaml(
        r#"
metadata:
  name: newStep
  futureKey: 42
spec:
  inputs:
    params:
      - name: p
        type: string
        possibleValues: [a, b]
"#,
    )
    .expect("Failed to parse step");

    assert_eq!(step.metadata.name, "newStep");
    assert_eq!(step.spec.inputs.parameters.len(), 1);
}

#[test]
fn test_missing_metadata_is_a_parse_error() {
    assert!(StepData::from_yaml("spec: {}").is_err());
}

#[test]
fn test_read_reports_parse_error_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.yaml");
    fs::write(&path, "metadata: [unclosed").expect("Failed to write file");

    match StepData::read(&path) {
        Err(GeneratorError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_read_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.yaml");

    assert!(matches!(
        StepData::read(&path),
        Err(GeneratorError::FileSystem { .. })
    ));
}
