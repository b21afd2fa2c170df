//! Stage descriptors, outcomes and pipeline states.

use std::fmt;

/// Whether a failed stage stops the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Failure aborts the run with a non-zero exit.
    Fatal,
    /// Failure is reported and the run continues.
    Advisory,
}

/// Result of running one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub ok: bool,
    pub message: String,
}

impl StageOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// The steps the orchestrator knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Every required source path exists.
    RequiredFiles,
    /// Host runtime version check.
    Environment,
    /// Install dependencies when the store is absent.
    Dependencies,
    /// Placeholder scan of the deployment manifest.
    Manifest,
    /// Delegated build command.
    Build,
    /// Expected artifacts exist after the build.
    VerifyOutput,
    /// Build record written to disk.
    WriteRecord,
}

impl StageKind {
    /// Section heading printed before the stage runs.
    ///
    /// The dependency stage has none: its result belongs to the environment
    /// section, and it opens its own heading only when it installs.
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::RequiredFiles => Some("📋 Checking required files..."),
            Self::Environment => Some("🔍 Checking environment..."),
            Self::Dependencies => None,
            Self::Manifest => Some("📄 Validating manifest..."),
            Self::Build => Some("🏗️  Building project..."),
            Self::VerifyOutput => Some("📁 Checking build output..."),
            Self::WriteRecord => Some("📦 Creating deployment info..."),
        }
    }

    pub fn default_severity(self) -> Severity {
        match self {
            Self::RequiredFiles | Self::Dependencies | Self::Build | Self::WriteRecord => {
                Severity::Fatal
            }
            Self::Environment | Self::Manifest | Self::VerifyOutput => Severity::Advisory,
        }
    }

    /// State the pipeline is in while this stage runs.
    pub fn state(self) -> PipelineState {
        match self {
            Self::RequiredFiles => PipelineState::CheckingFiles,
            Self::Environment => PipelineState::CheckingEnv,
            Self::Dependencies => PipelineState::InstallingDeps,
            Self::Manifest => PipelineState::AuditingManifest,
            Self::Build => PipelineState::Building,
            Self::VerifyOutput => PipelineState::VerifyingOutput,
            Self::WriteRecord => PipelineState::WritingRecord,
        }
    }
}

/// One entry of the ordered stage list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub kind: StageKind,
    pub severity: Severity,
}

impl StageDescriptor {
    /// Descriptor with the stage's default severity.
    pub fn new(kind: StageKind) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
        }
    }

    pub fn with_severity(kind: StageKind, severity: Severity) -> Self {
        Self { kind, severity }
    }

    /// The full build: preconditions, delegated build, postconditions.
    pub fn default_sequence() -> Vec<Self> {
        [
            StageKind::RequiredFiles,
            StageKind::Environment,
            StageKind::Dependencies,
            StageKind::Manifest,
            StageKind::Build,
            StageKind::VerifyOutput,
            StageKind::WriteRecord,
        ]
        .into_iter()
        .map(Self::new)
        .collect()
    }
}

/// Position of a run in the build state machine.
///
/// `Failed` and `Done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    CheckingFiles,
    CheckingEnv,
    InstallingDeps,
    AuditingManifest,
    Building,
    VerifyingOutput,
    WritingRecord,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Process exit status for a terminal state.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Done => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::CheckingFiles => "checking-files",
            Self::CheckingEnv => "checking-env",
            Self::InstallingDeps => "installing-deps",
            Self::AuditingManifest => "auditing-manifest",
            Self::Building => "building",
            Self::VerifyingOutput => "verifying-output",
            Self::WritingRecord => "writing-record",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sequence_follows_state_machine_order() {
        let states: Vec<_> = StageDescriptor::default_sequence()
            .iter()
            .map(|d| d.kind.state())
            .collect();

        assert_eq!(
            states,
            vec![
                PipelineState::CheckingFiles,
                PipelineState::CheckingEnv,
                PipelineState::InstallingDeps,
                PipelineState::AuditingManifest,
                PipelineState::Building,
                PipelineState::VerifyingOutput,
                PipelineState::WritingRecord,
            ]
        );
    }

    #[test]
    fn only_gating_stages_are_fatal() {
        let fatal: Vec<_> = StageDescriptor::default_sequence()
            .into_iter()
            .filter(|d| d.severity == Severity::Fatal)
            .map(|d| d.kind)
            .collect();

        assert_eq!(
            fatal,
            vec![
                StageKind::RequiredFiles,
                StageKind::Dependencies,
                StageKind::Build,
                StageKind::WriteRecord,
            ]
        );
    }

    #[test]
    fn only_done_exits_zero() {
        assert_eq!(PipelineState::Done.exit_code(), 0);
        assert_eq!(PipelineState::Failed.exit_code(), 1);
        assert!(PipelineState::Failed.is_terminal());
        assert!(!PipelineState::Building.is_terminal());
    }
}
