//! Main pipeline orchestration.
//!
//! This module provides the [`Pipeline`] orchestrator that runs an ordered
//! list of stages and applies each stage's fatal/advisory policy.

use super::record::BuildRecord;
use super::{
    BuildContext, PipelineState, Severity, StageDescriptor, StageKind, StageOutcome, build,
    dependencies, environment, manifest, preconditions, record,
};
use crate::cli::OutputManager;
use crate::error::Result;
use crate::process::CommandRunner;
use crate::settings::Settings;

/// Outcome of one stage as run by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub kind: StageKind,
    pub severity: Severity,
    pub outcome: StageOutcome,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Terminal state: `Done` or `Failed`.
    pub state: PipelineState,
    /// Stages that ran, in order. Stages after a fatal failure are absent.
    pub stages: Vec<StageReport>,
    /// The record written by the run, if it got that far.
    pub record: Option<BuildRecord>,
}

impl PipelineReport {
    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    pub fn succeeded(&self) -> bool {
        self.state == PipelineState::Done
    }

    /// Report for `kind`, if that stage ran.
    pub fn stage(&self, kind: StageKind) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    /// Advisory stages that reported a problem.
    pub fn warnings(&self) -> impl Iterator<Item = &StageReport> {
        self.stages
            .iter()
            .filter(|s| s.severity == Severity::Advisory && !s.outcome.ok)
    }
}

/// Sequential build orchestrator.
///
/// Runs its stages top to bottom, short-circuiting only when a fatal stage
/// fails. Every subprocess goes through the injected [`CommandRunner`].
///
/// # Examples
///
/// ```no_run
/// use addin_build::cli::OutputManager;
/// use addin_build::pipeline::Pipeline;
/// use addin_build::process::SystemRunner;
/// use addin_build::settings::SettingsBuilder;
///
/// # async fn example() -> addin_build::Result<()> {
/// let settings = SettingsBuilder::new().working_dir(".").build()?;
/// let output = OutputManager::new(false, false);
/// let runner = SystemRunner::new();
///
/// let report = Pipeline::new(&settings, &runner, &output).run().await?;
/// std::process::exit(report.exit_code());
/// # }
/// ```
pub struct Pipeline<'a, R> {
    settings: &'a Settings,
    runner: &'a R,
    output: &'a OutputManager,
    stages: Vec<StageDescriptor>,
}

impl<'a, R: CommandRunner> Pipeline<'a, R> {
    /// Pipeline with the default stage sequence.
    pub fn new(settings: &'a Settings, runner: &'a R, output: &'a OutputManager) -> Self {
        Self {
            settings,
            runner,
            output,
            stages: StageDescriptor::default_sequence(),
        }
    }

    /// Replaces the stage list.
    pub fn with_stages(mut self, stages: Vec<StageDescriptor>) -> Self {
        self.stages = stages;
        self
    }

    /// Runs every stage in order.
    ///
    /// # Errors
    ///
    /// Only console write failures surface as `Err`. Stage failures, fatal
    /// or not, are part of the returned [`PipelineReport`].
    pub async fn run(&self) -> Result<PipelineReport> {
        let output = self.output;
        output.banner(&format!("🚀 Building {}...", self.settings.project_name()))?;

        let mut ctx = BuildContext::new(self.settings, output, self.runner);
        let mut state = PipelineState::Start;
        let mut reports = Vec::with_capacity(self.stages.len());

        for descriptor in &self.stages {
            state = transition(state, descriptor.kind.state());
            if let Some(title) = descriptor.kind.title() {
                output.section(title)?;
            }

            let outcome = match self.run_stage(descriptor.kind, &mut ctx).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::debug!("Stage {:?} returned error: {}", descriptor.kind, e);
                    StageOutcome::fail(e.to_string())
                }
            };

            let fatal = !outcome.ok && descriptor.severity == Severity::Fatal;
            self.report(descriptor, &outcome)?;
            reports.push(StageReport {
                kind: descriptor.kind,
                severity: descriptor.severity,
                outcome,
            });

            if fatal {
                state = transition(state, PipelineState::Failed);
                return Ok(PipelineReport {
                    state,
                    stages: reports,
                    record: None,
                });
            }
        }

        let state = transition(state, PipelineState::Done);
        self.print_next_steps()?;

        Ok(PipelineReport {
            state,
            stages: reports,
            record: ctx.record,
        })
    }

    async fn run_stage(
        &self,
        kind: StageKind,
        ctx: &mut BuildContext<'a, R>,
    ) -> Result<StageOutcome> {
        match kind {
            StageKind::RequiredFiles => preconditions::check_required_files(ctx),
            StageKind::Environment => environment::report_host_version(ctx).await,
            StageKind::Dependencies => dependencies::install_dependencies(ctx).await,
            StageKind::Manifest => manifest::audit_manifest(ctx),
            StageKind::Build => build::run_build(ctx).await,
            StageKind::VerifyOutput => build::verify_outputs(ctx),
            StageKind::WriteRecord => record::write_record(ctx),
        }
    }

    fn report(&self, descriptor: &StageDescriptor, outcome: &StageOutcome) -> Result<()> {
        match (outcome.ok, descriptor.severity) {
            (true, _) => self.output.success(&outcome.message)?,
            (false, Severity::Advisory) => self.output.warn(&outcome.message)?,
            (false, Severity::Fatal) => {
                self.output.failure(&outcome.message)?;
                self.output.error(&format!("\n❌ Build failed: {}", outcome.message))?;
            }
        }
        Ok(())
    }

    fn print_next_steps(&self) -> Result<()> {
        let output = self.output;
        output.section("🎉 Build completed successfully!")?;

        let steps = self.settings.next_steps();
        if !steps.is_empty() {
            output.section("📋 Next steps:")?;
            for (i, step) in steps.iter().enumerate() {
                output.indent(&format!("{}. {}", i + 1, step))?;
            }
        }

        if let Some(hint) = self.settings.readme_hint() {
            output.section(&format!("📖 {hint}"))?;
        }
        Ok(())
    }
}

fn transition(from: PipelineState, to: PipelineState) -> PipelineState {
    log::debug!("Pipeline state: {} -> {}", from, to);
    to
}
