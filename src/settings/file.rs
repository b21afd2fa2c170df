//! Optional TOML settings file.

use crate::error::{BuildError, CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "addin-build.toml";

/// On-disk overrides for [`Settings`](super::Settings).
///
/// ```toml
/// min_host_major = 18
/// build_command = ["npm", "run", "build:prod"]
/// expected_outputs = ["dist/taskpane.js", "dist/manifest.xml"]
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub project_name: Option<String>,
    pub host_runtime_name: Option<String>,
    pub min_host_major: Option<u64>,
    pub required_files: Option<Vec<String>>,
    pub placeholders: Option<Vec<String>>,
    pub expected_outputs: Option<Vec<String>>,
    pub manifest_path: Option<String>,
    pub dependency_store: Option<String>,
    pub record_path: Option<String>,
    pub install_command: Option<Vec<String>>,
    pub build_command: Option<Vec<String>>,
    pub version_command: Option<Vec<String>>,
    pub next_steps: Option<Vec<String>>,
    pub readme_hint: Option<String>,
}

impl SettingsFile {
    /// Reads and parses a settings file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BuildError::Cli(CliError::InvalidArguments {
                reason: format!("Cannot read settings file {}: {}", path.display(), e),
            })
        })?;

        toml::from_str(&contents).map_err(|source| BuildError::SettingsFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads [`DEFAULT_SETTINGS_FILE`] from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(DEFAULT_SETTINGS_FILE);
        if !path.is_file() {
            log::debug!("No settings file at {}", path.display());
            return Ok(None);
        }

        log::info!("Loading settings from {}", path.display());
        Self::load(&path).map(Some)
    }
}
