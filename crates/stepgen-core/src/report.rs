//! Outcome of a generation run.
//!
//! [`GenerationReport`] records every artifact a run touched and formats as
//! markdown, so the CLI can print it as plain text or through its terminal
//! renderer.

use std::{fmt, path::PathBuf};

use serde::Serialize;

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// File was (re)written
    Written,

    /// File already existed and was left untouched
    Kept,
}

impl ArtifactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactStatus::Written => "written",
            ArtifactStatus::Kept => "kept",
        }
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One artifact and its status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtifactOutcome {
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Summary of a generation run.
///
/// # Examples
///
/// ```rust
/// use stepgen_core::report::{ArtifactStatus, GenerationReport};
///
/// let mut report = GenerationReport::default();
/// report.steps.push("mavenBuild".to_string());
/// report.record("cmd/mavenBuild_generated.go", ArtifactStatus::Written);
/// report.record("cmd/mavenBuild.go", ArtifactStatus::Kept);
///
/// assert_eq!(report.written().count(), 1);
/// let output = report.to_string();
/// assert!(output.contains("`cmd/mavenBuild.go` (kept)"));
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GenerationReport {
    /// Step names in processing order
    pub steps: Vec<String>,
    /// Artifacts in the order they were handled
    pub artifacts: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    /// Appends an artifact outcome.
    pub fn record(&mut self, path: impl Into<PathBuf>, status: ArtifactStatus) {
        self.artifacts.push(ArtifactOutcome {
            path: path.into(),
            status,
        });
    }

    /// Artifacts written during the run.
    pub fn written(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.status == ArtifactStatus::Written)
    }

    /// Artifacts left untouched because they already existed.
    pub fn kept(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.status == ArtifactStatus::Kept)
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Generated {} step(s)", self.steps.len())?;

        if self.steps.is_empty() {
            writeln!(f)?;
            return write!(f, "No metadata files found.");
        }

        writeln!(f)?;
        for step in &self.steps {
            writeln!(f, "- {step}")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "## Files ({} written, {} kept)",
            self.written().count(),
            self.kept().count()
        )?;
        writeln!(f)?;
        for artifact in &self.artifacts {
            writeln!(f, "- `{}` ({})", artifact.path.display(), artifact.status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = GenerationReport::default();
        let output = report.to_string();
        assert!(output.contains("# Generated 0 step(s)"));
        assert!(output.contains("No metadata files found."));
    }

    #[test]
    fn test_report_counts() {
        let mut report = GenerationReport::default();
        report.steps.push("a".to_string());
        report.record("a_generated.go", ArtifactStatus::Written);
        report.record("a_generated_test.go", ArtifactStatus::Written);
        report.record("a.go", ArtifactStatus::Kept);

        let output = report.to_string();
        assert!(output.contains("## Files (2 written, 1 kept)"));
        assert!(output.contains("- `a_generated.go` (written)"));
        assert!(output.contains("- a\n"));
    }

    #[test]
    fn test_status_serialises_lowercase() {
        let json = serde_json::to_string(&ArtifactStatus::Kept).expect("Failed to serialise");
        assert_eq!(json, "\"kept\"");
    }
}
