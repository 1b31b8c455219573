//! Handlebars templates for the generated Go sources.
//!
//! Block tags sit on lines of their own wherever the surrounding Go code is
//! line-sensitive, so the output stays valid whether or not the standalone
//! lines are stripped. Literal braces next to a tag are separated by a space
//! to never form `{{{`. Inline list literals put separators between elements
//! only, so single-element lists read `{ {..} }`.

/// Command definition, rendered against a `StepInfo`.
pub const STEP_GO_TEMPLATE: &str = r#"// Code generated by stepgen. DO NOT EDIT.

package cmd

import (
	"fmt"
{{#if os_import}}
	"os"
{{/if}}
{{#if output_resources}}
	"path/filepath"
{{/if}}
	"time"

{{#if export_prefix}}
	{{export_prefix}} "github.com/SAP/jenkins-library/cmd"
{{/if}}
	"github.com/SAP/jenkins-library/pkg/config"
	"github.com/SAP/jenkins-library/pkg/log"
{{#if output_resources}}
	"github.com/SAP/jenkins-library/pkg/piperenv"
{{/if}}
	"github.com/SAP/jenkins-library/pkg/telemetry"
	"github.com/spf13/cobra"
)

type {{step_name}}Options struct {
{{#each parameters}}
	{{golangName name}} {{go_type}} `json:"{{name}},omitempty"`
{{/each}}
}
{{#each output_resources}}

{{def}}
{{/each}}

// {{cobra_cmd_func_name}} {{short}}
func {{cobra_cmd_func_name}}() *cobra.Command {
	const STEP_NAME = "{{step_name}}"

	metadata := {{step_name}}Metadata()
	var stepConfig {{step_name}}Options
	var startTime time.Time
{{#each output_resources}}
	var {{name}} {{object_name}}
{{/each}}

	var {{create_cmd_var}} = &cobra.Command{
		Use:   STEP_NAME,
		Short: "{{short}}",
		Long:  `{{longName long}}`,
		PreRunE: func(cmd *cobra.Command, _ []string) error {
			startTime = time.Now()
			log.SetStepName(STEP_NAME)
			log.SetVerbose({{qualifier}}GeneralConfig.Verbose)

			fatalHook := &log.FatalHook{CorrelationID: {{qualifier}}GeneralConfig.CorrelationID}
			log.RegisterHook(fatalHook)

			err := {{qualifier}}PrepareConfig(cmd, &metadata, STEP_NAME, &stepConfig, config.OpenPiperFile)
			if err != nil {
				log.SetErrorCategory(log.ErrorConfiguration)
				return err
			}
{{#each secrets}}
			log.RegisterSecret(stepConfig.{{golangName this}})
{{/each}}

			if len({{qualifier}}GeneralConfig.HookConfig.SentryConfig.Dsn) > 0 {
				sentryHook := log.NewSentryHook({{qualifier}}GeneralConfig.HookConfig.SentryConfig.Dsn, {{qualifier}}GeneralConfig.CorrelationID)
				log.RegisterHook(&sentryHook)
			}

			return nil
		},
		Run: func(_ *cobra.Command, _ []string) {
			telemetryData := telemetry.CustomData{}
			telemetryData.ErrorCode = "1"
			handler := func() {
				config.RemoveVaultSecretFiles()
{{#each output_resources}}
				{{name}}.persist({{@root.qualifier}}GeneralConfig.EnvRootPath, "{{name}}")
{{/each}}
				telemetryData.Duration = fmt.Sprintf("%v", time.Since(startTime).Milliseconds())
				telemetryData.ErrorCategory = log.GetErrorCategory().String()
				telemetry.Send(&telemetryData)
			}
			log.DeferExitHandler(handler)
			defer handler()
			telemetry.Initialize({{qualifier}}GeneralConfig.NoTelemetry, STEP_NAME)
			{{step_name}}(stepConfig, &telemetryData{{#each output_resources}}, &{{name}}{{/each}})
			telemetryData.ErrorCode = "0"
			log.Entry().Info("SUCCESS")
		},
	}

	{{flags_func}}({{create_cmd_var}}, &stepConfig)
	return {{create_cmd_var}}
}

func {{flags_func}}(cmd *cobra.Command, stepConfig *{{step_name}}Options) {
{{#each parameters}}
	cmd.Flags().{{flagType type}}(&stepConfig.{{golangName name}}, "{{name}}", {{default}}, "{{description}}")
{{/each}}

{{#each declared_parameters}}
{{#if mandatory}}
	cmd.MarkFlagRequired("{{name}}")
{{/if}}
{{/each}}
}

// retrieve step metadata
func {{step_name}}Metadata() config.StepData {
	var theMetaData = config.StepData{
		Metadata: config.StepMetadata{
			Name:        "{{step_name}}",
			Aliases:     []config.Alias{ {{#each aliases}}{Name: "{{name}}", Deprecated: {{deprecated}} }{{#unless @last}}, {{/unless}}{{/each}} },
			Description: "{{short}}",
		},
		Spec: config.StepSpec{
			Inputs: config.StepInputs{
				Parameters: []config.StepParameters{
{{#each declared_parameters}}
					{
						Name:        "{{name}}",
						ResourceRef: []config.ResourceReference{ {{#each resource_ref}}{Name: "{{name}}"{{#if param}}, Param: "{{param}}"{{/if}}{{#if paths}}, Paths: []string{ {{#each paths}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}} }{{/if}}{{#if type}}, Type: "{{type}}"{{/if}} }{{#unless @last}}, {{/unless}}{{/each}} },
						Scope:       []string{ {{#each scope}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}} },
						Type:        "{{type}}",
						Mandatory:   {{mandatory}},
						Aliases:     []config.Alias{ {{#each aliases}}{Name: "{{name}}", Deprecated: {{deprecated}} }{{#unless @last}}, {{/unless}}{{/each}} },
					},
{{/each}}
				},
			},
{{#if containers}}
			Containers: []config.Container{
{{#each containers}}
				{ {{#if name}}Name: "{{name}}", {{/if}}{{#if image}}Image: "{{image}}", {{/if}}{{#if env}}EnvVars: []config.EnvVar{ {{#each env}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}}{{#if workingDir}}WorkingDir: "{{workingDir}}", {{/if}}{{#if options}}Options: []config.Option{ {{#each options}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}}{{#if conditions}}Conditions: []config.Condition{ {{#each conditions}}{ConditionRef: "{{conditionRef}}", Params: []config.Param{ {{#each params}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} } }{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}} },
{{/each}}
			},
{{/if}}
{{#if sidecars}}
			Sidecars: []config.Container{
{{#each sidecars}}
				{ {{#if name}}Name: "{{name}}", {{/if}}{{#if image}}Image: "{{image}}", {{/if}}{{#if env}}EnvVars: []config.EnvVar{ {{#each env}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}}{{#if workingDir}}WorkingDir: "{{workingDir}}", {{/if}}{{#if options}}Options: []config.Option{ {{#each options}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}}{{#if conditions}}Conditions: []config.Condition{ {{#each conditions}}{ConditionRef: "{{conditionRef}}", Params: []config.Param{ {{#each params}}{Name: "{{name}}", Value: "{{value}}"}{{#unless @last}}, {{/unless}}{{/each}} } }{{#unless @last}}, {{/unless}}{{/each}} }, {{/if}} },
{{/each}}
			},
{{/if}}
{{#if outputs}}
			Outputs: config.StepOutputs{
				Resources: []config.StepResources{
{{#each outputs}}
					{
						Name: "{{name}}",
						Type: "{{type}}",
{{#if params}}
						Parameters: []map[string]interface{}{
{{#each params}}
							{"name": "{{name}}"{{#if fields}}, "fields": []map[string]string{ {{#each fields}}{"name": "{{name}}"}{{#unless @last}}, {{/unless}}{{/each}} }{{/if}}{{#if tags}}, "tags": []map[string]string{ {{#each tags}}{"name": "{{name}}"}{{#unless @last}}, {{/unless}}{{/each}} }{{/if}} },
{{/each}}
						},
{{/if}}
					},
{{/each}}
				},
			},
{{/if}}
		},
	}
	return theMetaData
}
"#;

/// Smoke test of the command definition.
pub const STEP_TEST_GO_TEMPLATE: &str = r#"// Code generated by stepgen. DO NOT EDIT.

package cmd

import (
	"testing"

	"github.com/stretchr/testify/assert"
)

func Test{{cobra_cmd_func_name}}(t *testing.T) {
	t.Parallel()

	testCmd := {{cobra_cmd_func_name}}()

	// only high level testing performed - details are tested in step generation procedure
	assert.Equal(t, "{{step_name}}", testCmd.Use, "command name incorrect")

}
"#;

/// Implementation stub, written once and then owned by the developer.
pub const STEP_GO_IMPLEMENTATION_TEMPLATE: &str = r#"package cmd

import (
	"fmt"

	"github.com/SAP/jenkins-library/pkg/command"
	"github.com/SAP/jenkins-library/pkg/log"
	"github.com/SAP/jenkins-library/pkg/piperutils"
	"github.com/SAP/jenkins-library/pkg/telemetry"
)

type {{step_name}}Utils interface {
	command.ExecRunner

	FileExists(filename string) (bool, error)

	// Add more methods here, or embed additional interfaces, or remove/replace as required.
	// The {{step_name}}Utils interface should be descriptive of your runtime dependencies,
	// i.e. include everything you need to be able to mock in tests.
	// Unit tests shall be executable in parallel (not depend on global state), and don't (re-)test dependencies.
}

type {{step_name}}UtilsBundle struct {
	*command.Command
	*piperutils.Files

	// Embed more structs as necessary to implement methods or interfaces you add to {{step_name}}Utils.
	// Structs embedded in this way must each have a unique set of methods attached.
	// If there is no struct which implements the method you need, attach the method to
	// {{step_name}}UtilsBundle and forward to the implementation of the dependency.
}

func new{{title step_name}}Utils() {{step_name}}Utils {
	utils := {{step_name}}UtilsBundle{
		Command: &command.Command{},
		Files:   &piperutils.Files{},
	}
	// Reroute command output to logging framework
	utils.Stdout(log.Writer())
	utils.Stderr(log.Writer())
	return &utils
}

func {{step_name}}(config {{step_name}}Options, telemetryData *telemetry.CustomData{{#each output_resources}}, {{name}} *{{object_name}}{{/each}}) {
	// Utils can be used wherever the command.ExecRunner interface is expected.
	// It can also be used for example as a mavenExecRunner.
	utils := new{{title step_name}}Utils()

	// Error situations should be bubbled up until they reach the line below which will then stop execution
	// through the log.Entry().Fatal() call leading to an os.Exit(1) in the end.
	err := run{{title step_name}}(&config, telemetryData, utils{{#each output_resources}}, {{name}}{{/each}})
	if err != nil {
		log.Entry().WithError(err).Fatal("step execution failed")
	}
}

func run{{title step_name}}(config *{{step_name}}Options, telemetryData *telemetry.CustomData, utils {{step_name}}Utils{{#each output_resources}}, {{name}} *{{object_name}}{{/each}}) error {
	log.Entry().WithField("LogField", "Log field content").Info("This is just a demo for a simple step.")

	// Example of calling methods from external dependencies directly on utils:
	exists, err := utils.FileExists("file.txt")
	if err != nil {
		// It is good practice to set an error category.
		// Most likely you want to do this at the place where enough context is known.
		log.SetErrorCategory(log.ErrorConfiguration)
		// Always wrap non-descriptive errors to enrich them with context for when they appear in the log:
		return fmt.Errorf("failed to check for important file: %w", err)
	}
	if !exists {
		log.SetErrorCategory(log.ErrorConfiguration)
		return fmt.Errorf("cannot run without important file")
	}

	return nil
}
"#;

/// Test stub for the implementation, written once.
pub const STEP_GO_IMPLEMENTATION_TEST_TEMPLATE: &str = r#"package cmd

import (
	"testing"

	"github.com/SAP/jenkins-library/pkg/mock"
	"github.com/stretchr/testify/assert"
)

type {{step_name}}MockUtils struct {
	*mock.ExecMockRunner
	*mock.FilesMock
}

func new{{title step_name}}TestsUtils() {{step_name}}MockUtils {
	utils := {{step_name}}MockUtils{
		ExecMockRunner: &mock.ExecMockRunner{},
		FilesMock:      &mock.FilesMock{},
	}
	return utils
}

func TestRun{{title step_name}}(t *testing.T) {
	t.Parallel()

	t.Run("happy path", func(t *testing.T) {
		t.Parallel()
		// init
		config := {{step_name}}Options{}

		utils := new{{title step_name}}TestsUtils()
		utils.AddFile("file.txt", []byte("dummy content"))

		// test
		err := run{{title step_name}}(&config, nil, utils{{#each output_resources}}, &{{object_name}}{}{{/each}})

		// assert
		assert.NoError(t, err)
	})

	t.Run("error path", func(t *testing.T) {
		t.Parallel()
		// init
		config := {{step_name}}Options{}

		utils := new{{title step_name}}TestsUtils()

		// test
		err := run{{title step_name}}(&config, nil, utils{{#each output_resources}}, &{{object_name}}{}{{/each}})

		// assert
		assert.EqualError(t, err, "cannot run without important file")
	})
}
"#;

/// Name of the aggregate registry file.
pub const METADATA_GENERATED_FILE_NAME: &str = "metadata_generated.go";

/// Aggregate registry mapping every step name to its metadata accessor.
pub const METADATA_GENERATED_TEMPLATE: &str = r#"// Code generated by stepgen. DO NOT EDIT.

package cmd

import "github.com/SAP/jenkins-library/pkg/config"

// GetAllStepMetadata return a map with all the step metadata mapped to their stepName
func GetAllStepMetadata() map[string]config.StepData {
	return map[string]config.StepData{
{{#each steps}}
		"{{this}}": {{this}}Metadata(),
{{/each}}
	}
}
"#;

/// Struct and `persist` method of an environment output resource.
pub const ENVIRONMENT_STRUCT_TEMPLATE: &str = r#"type {{struct_name}} struct {
{{#each uncategorized}}
	{{field}} {{type}}
{{/each}}
{{#each categories}}
	{{name}} struct {
{{#each parameters}}
		{{field}} {{type}}
{{/each}}
	}
{{/each}}
}

func (p *{{struct_name}}) persist(path, resourceName string) {
	content := []struct {
		category string
		name     string
		value    interface{}
	}{
{{#each parameters}}
		{category: "{{category}}", name: "{{name}}", value: p.{{accessor}} },
{{/each}}
	}

	errCount := 0
	for _, param := range content {
		err := piperenv.SetResourceParameter(path, resourceName, filepath.Join(param.category, param.name), param.value)
		if err != nil {
			log.Entry().WithError(err).Error("Error persisting piper environment.")
			errCount++
		}
	}
	if errCount > 0 {
		log.Entry().Fatal("failed to persist Piper environment")
	}
}"#;

/// Struct and `persist` method of a metric output resource.
pub const METRIC_STRUCT_TEMPLATE: &str = r#"type {{struct_name}} struct {
{{#each measurements}}
	{{name}} struct {
		fields struct {
{{#each fields}}
			{{field}} {{type}}
{{/each}}
		}
		tags struct {
{{#each tags}}
			{{field}} string
{{/each}}
		}
	}
{{/each}}
}

func (i *{{struct_name}}) persist(path, resourceName string) {
	measurementContent := []struct {
		measurement string
		valType     string
		name        string
		value       interface{}
	}{
{{#each entries}}
		{valType: config.{{val_type}}, measurement: "{{measurement}}", name: "{{name}}", value: i.{{accessor}} },
{{/each}}
	}

	errCount := 0
	for _, metric := range measurementContent {
		err := piperenv.SetResourceParameter(path, resourceName, filepath.Join(metric.measurement, fmt.Sprintf("%vs", metric.valType), metric.name), metric.value)
		if err != nil {
			log.Entry().WithError(err).Error("Error persisting influx environment.")
			errCount++
		}
	}
	if errCount > 0 {
		log.Entry().Fatal("failed to persist Influx environment")
	}
}"#;
