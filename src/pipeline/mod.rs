//! Build pipeline: preconditions, delegated build, postconditions.
//!
//! The orchestrator walks an ordered list of [`StageDescriptor`]s. Each
//! stage produces a [`StageOutcome`]; a failed `Fatal` stage ends the run,
//! a failed `Advisory` stage is reported and the run continues.
//!
//! # Module Organization
//!
//! - [`preconditions`] - required source files
//! - [`environment`] - host runtime version report
//! - [`dependencies`] - install when the dependency store is absent
//! - [`manifest`] - placeholder audit of the deployment manifest
//! - [`build`] - delegated build and artifact verification
//! - [`record`] - build-provenance JSON record
//! - `orchestrator` - the [`Pipeline`] that ties them together

pub mod build;
mod context;
pub mod dependencies;
pub mod environment;
pub mod manifest;
mod orchestrator;
pub mod preconditions;
pub mod record;
mod stage;

pub use context::BuildContext;
pub use orchestrator::{Pipeline, PipelineReport, StageReport};
pub use record::{ArtifactEntry, BuildRecord};
pub use stage::{PipelineState, Severity, StageDescriptor, StageKind, StageOutcome};
