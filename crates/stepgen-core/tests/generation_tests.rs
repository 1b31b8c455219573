mod common;

use std::fs;

use common::TestWorkspace;
use stepgen_core::{
    handle_generate_steps, ArtifactStatus, GenerateSteps, GeneratorError, StepData,
};

const INTEGRATION_TEST: &str = r#"
metadata:
  name: integrationArtifactIntegrationTest
  aliases:
    - name: cpiIntegrationTest
      deprecated: true
  description: Test the service endpoint of your iFlow
  longDescription: |
    With this step you can test your integration flow exposed by `SAP Cloud Integration`.
spec:
  inputs:
    params:
      - name: integrationFlowServiceKey
        type: string
        description: Service key JSON string
        scope: [PARAMETERS]
        mandatory: true
        secret: true
        resourceRef:
          - name: cpiCredentialsId
            type: secret
            param: integrationFlowServiceKey
      - name: integrationFlowId
        type: string
        scope: [PARAMETERS, STAGES, STEPS]
        mandatory: true
        aliases:
          - name: flowId
      - name: verbose
        type: bool
        default: true
      - name: integrationFlowId
        type: string
        description: duplicate declaration
      - name: timeout
        type: int
        default: 30
      - name: contentType
        type: string
        default: application/json
      - name: tags
        type: "[]string"
        default: [smoke, nightly]
  containers:
    - name: node
      image: node:lts-buster
      workingDir: /home/node
      env:
        - name: NPM_CONFIG_PREFIX
          value: /home/node/.npm-global
      conditions:
        - conditionRef: strings-equal
          params:
            - name: buildTool
              value: npm
  sidecars:
    - name: selenium
      image: selenium/standalone-chrome
  outputs:
    resources:
      - name: commonPipelineEnvironment
        type: piperEnvironment
        params:
          - name: custom/integrationFlowServiceEndpoint
          - name: custom/build/number
            type: int
          - name: artifactVersion
      - name: influx
        type: influx
        params:
          - name: step_data
            fields:
              - name: integration_test
                type: bool
              - name: duration
                type: int
            tags:
              - name: stage
      - name: reports
        type: reports
        params:
          - filePattern: "**/TEST-*.xml"
"#;

const SHELL: &str = r#"
metadata:
  name: shellExecute
  description: Executes shell scripts
spec:
  inputs:
    params:
      - name: sources
        type: "[]string"
"#;

#[test]
fn test_full_step_generation() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata("integrationArtifactIntegrationTest.yaml", INTEGRATION_TEST);

    let report = workspace
        .generator(None)
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");
    assert_eq!(report.steps, vec!["integrationArtifactIntegrationTest"]);

    let command = workspace.read("integrationArtifactIntegrationTest_generated.go");

    // options struct is deduplicated
    assert_eq!(command.matches("\tIntegrationFlowID string `json:").count(), 1);
    assert!(command.contains("\tVerbose bool `json:\"verbose,omitempty\"`"));
    assert!(command.contains("\tTags []string `json:\"tags,omitempty\"`"));

    // flags with synthesised and declared defaults
    assert!(command.contains(
        "cmd.Flags().StringVar(&stepConfig.IntegrationFlowServiceKey, \"integrationFlowServiceKey\", os.Getenv(\"PIPER_integrationFlowServiceKey\"), \"Service key JSON string\")"
    ));
    assert!(command.contains("cmd.Flags().BoolVar(&stepConfig.Verbose, \"verbose\", true, \"\")"));
    assert!(command.contains("cmd.Flags().IntVar(&stepConfig.Timeout, \"timeout\", 30, \"\")"));
    assert!(command.contains(
        "cmd.Flags().StringVar(&stepConfig.ContentType, \"contentType\", `application/json`, \"\")"
    ));
    assert!(command.contains(
        "cmd.Flags().StringSliceVar(&stepConfig.Tags, \"tags\", []string{`smoke`, `nightly`}, \"\")"
    ));
    assert_eq!(command.matches("cmd.Flags().StringVar(&stepConfig.IntegrationFlowID").count(), 1);

    // every declaration stays visible to the metadata accessor
    assert_eq!(command.matches("cmd.MarkFlagRequired(\"integrationFlowId\")").count(), 1);
    assert_eq!(command.matches("Name:        \"integrationFlowId\",").count(), 2);

    assert!(command.contains("log.RegisterSecret(stepConfig.IntegrationFlowServiceKey)"));
    assert!(command.contains("\t\"os\"\n"));
    assert!(command.contains("Long:  `With this step you can test your integration flow exposed by ` + \"`\" + `SAP Cloud Integration` + \"`\" + `.`,"));

    // metadata accessor
    assert!(command.contains("Aliases:     []config.Alias{ {Name: \"cpiIntegrationTest\", Deprecated: true } },"));
    assert!(command.contains("ResourceReference{ {Name: \"cpiCredentialsId\", Param: \"integrationFlowServiceKey\", Type: \"secret\" } },"));
    assert!(command.contains("Scope:       []string{ \"PARAMETERS\", \"STAGES\", \"STEPS\" },"));
    assert!(command.contains("Image: \"node:lts-buster\", "));
    assert!(command.contains("WorkingDir: \"/home/node\", "));
    assert!(command.contains("{ConditionRef: \"strings-equal\", Params: []config.Param{ {Name: \"buildTool\", Value: \"npm\"} } }"));
    assert!(command.contains("Sidecars: []config.Container{"));
    assert!(command.contains("Name: \"reports\","));

    // output resources, unknown kind skipped
    assert!(command.contains("type integrationArtifactIntegrationTestCommonPipelineEnvironment struct {"));
    assert!(command.contains("\tArtifactVersion string\n"));
    assert!(command.contains("\t\tBuild_number int\n"));
    assert!(command.contains("type integrationArtifactIntegrationTestInflux struct {"));
    assert!(command.contains("\t\t\tIntegration_test bool\n"));
    assert!(!command.contains("integrationArtifactIntegrationTestReports"));
    assert!(command.contains(
        "integrationArtifactIntegrationTest(stepConfig, &telemetryData, &commonPipelineEnvironment, &influx)"
    ));

    let stub = workspace.read("integrationArtifactIntegrationTest.go");
    assert!(stub.contains("func newIntegrationArtifactIntegrationTestUtils() integrationArtifactIntegrationTestUtils {"));
    assert!(stub.contains("influx *integrationArtifactIntegrationTestInflux"));

    let stub_test = workspace.read("integrationArtifactIntegrationTest_test.go");
    assert!(stub_test.contains("&integrationArtifactIntegrationTestCommonPipelineEnvironment{}, &integrationArtifactIntegrationTestInflux{}"));
}

#[test]
fn test_nested_metadata_and_registry() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata("sap/integrationArtifactIntegrationTest.yaml", INTEGRATION_TEST);
    workspace.add_metadata("shellExecute.yaml", SHELL);
    workspace.add_metadata("README.md", "not metadata");

    let report = workspace
        .generator(None)
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");

    assert_eq!(
        report.steps,
        vec!["integrationArtifactIntegrationTest", "shellExecute"]
    );

    let registry = workspace.read("metadata_generated.go");
    assert!(registry.contains(
        "\"integrationArtifactIntegrationTest\": integrationArtifactIntegrationTestMetadata(),"
    ));
    assert!(registry.contains("\"shellExecute\": shellExecuteMetadata(),"));

    let shell = workspace.read("shellExecute_generated.go");
    assert!(shell.contains("cmd.Flags().StringSliceVar(&stepConfig.Sources, \"sources\", []string{}, \"\")"));
    assert!(!shell.contains("\t\"os\"\n"));
    assert!(!shell.contains("Containers:"));
}

#[test]
fn test_second_run_rewrites_generated_and_keeps_stubs() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata("shellExecute.yaml", SHELL);
    let generator = workspace.generator(Some("piper"));

    generator
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");
    let generated = workspace.read("shellExecute_generated.go");
    let stub_path = workspace.target_dir.join("shellExecute.go");
    fs::write(&stub_path, "package cmd\n\n// custom\n").expect("Failed to edit stub");

    let report = generator
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");

    assert_eq!(workspace.read("shellExecute_generated.go"), generated);
    assert_eq!(workspace.read("shellExecute.go"), "package cmd\n\n// custom\n");
    let statuses: Vec<ArtifactStatus> = report.artifacts.iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        vec![
            ArtifactStatus::Written,
            ArtifactStatus::Written,
            ArtifactStatus::Kept,
            ArtifactStatus::Kept,
            ArtifactStatus::Written,
        ]
    );
}

#[test]
fn test_metadata_changes_leave_stubs_untouched() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata("shellExecute.yaml", SHELL);
    let generator = workspace.generator(None);

    generator
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");
    let stub = workspace.read("shellExecute.go");
    let stub_test = workspace.read("shellExecute_test.go");

    let extended = format!(
        "{SHELL}      - name: scriptArguments\n        type: \"[]string\"\n  outputs:\n    resources:\n      - name: commonPipelineEnvironment\n        type: piperEnvironment\n        params:\n          - name: custom/scriptResult\n"
    );
    workspace.add_metadata("shellExecute.yaml", &extended);

    let report = generator
        .generate_from_dir(&workspace.metadata_dir)
        .expect("Failed to generate");

    let command = workspace.read("shellExecute_generated.go");
    assert!(command.contains("\tScriptArguments []string `json:\"scriptArguments,omitempty\"`"));
    assert!(command.contains("type shellExecuteCommonPipelineEnvironment struct {"));
    assert_eq!(workspace.read("shellExecute.go"), stub);
    assert_eq!(workspace.read("shellExecute_test.go"), stub_test);
    assert!(!stub.contains("commonPipelineEnvironment"));
    assert_eq!(report.kept().count(), 2);
}

#[test]
fn test_malformed_resource_aborts_file() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata(
        "badResource.yaml",
        r#"
metadata:
  name: badResource
spec:
  outputs:
    resources:
      - name: commonPipelineEnvironment
        type: piperEnvironment
        params:
          - name: custom/not-valid
"#,
    );

    let err = workspace
        .generator(None)
        .generate_from_dir(&workspace.metadata_dir)
        .unwrap_err();

    assert!(matches!(err, GeneratorError::MalformedResource { .. }));
    assert!(!workspace.target_dir.join("badResource_generated.go").exists());
}

#[test]
fn test_handle_generate_steps_with_params() {
    let workspace = TestWorkspace::new();
    workspace.add_metadata("shellExecute.yaml", SHELL);

    let report = handle_generate_steps(&GenerateSteps {
        metadata_dir: workspace.metadata_dir.display().to_string(),
        target_dir: Some(workspace.target_dir.display().to_string()),
        export_prefix: Some("piper".to_string()),
    })
    .expect("Failed to generate");

    assert_eq!(report.written().count(), 5);
    assert!(workspace
        .read("shellExecute_generated.go")
        .contains("\tpiper \"github.com/SAP/jenkins-library/cmd\""));
}

#[test]
fn test_metadata_round_trips_through_serde() {
    let step = StepData::from_yaml(INTEGRATION_TEST).expect("Failed to parse");
    let yaml = serde_yaml::to_string(&step).expect("Failed to serialise");
    let reparsed = StepData::from_yaml(&yaml).expect("Failed to reparse");
    assert_eq!(reparsed, step);
}
