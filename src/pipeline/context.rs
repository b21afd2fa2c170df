//! State shared between stages of a single run.

use super::record::{ArtifactEntry, BuildRecord};
use crate::cli::OutputManager;
use crate::settings::Settings;

/// Inputs and intermediate results of one pipeline run.
///
/// Created fresh for every run and dropped at the end; nothing here
/// outlives the process.
pub struct BuildContext<'a, R> {
    pub settings: &'a Settings,
    pub output: &'a OutputManager,
    pub runner: &'a R,
    /// Raw version string reported by the host runtime version command.
    pub host_version: Option<String>,
    /// Expected outputs found on disk after the build.
    pub artifacts: Vec<ArtifactEntry>,
    pub record: Option<BuildRecord>,
}

impl<'a, R> BuildContext<'a, R> {
    pub fn new(settings: &'a Settings, output: &'a OutputManager, runner: &'a R) -> Self {
        Self {
            settings,
            output,
            runner,
            host_version: None,
            artifacts: Vec::new(),
            record: None,
        }
    }
}
