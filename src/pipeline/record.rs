//! Build-provenance record.
//!
//! ```json
//! {
//!   "buildDate": "2026-10-19T08:15:42.120Z",
//!   "hostVersion": "v18.17.0",
//!   "files": [{ "name": "dist/taskpane.js", "size": 48213 }]
//! }
//! ```

use super::{BuildContext, StageOutcome};
use crate::error::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recorded when the host version check produced nothing.
pub const UNKNOWN_HOST_VERSION: &str = "unknown";

/// Summary of a completed build, written once per successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecord {
    #[serde(with = "iso_millis")]
    pub build_date: DateTime<Utc>,
    pub host_version: String,
    pub files: Vec<ArtifactEntry>,
}

/// An expected output that existed after the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Path relative to the working directory, as listed in the settings.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl BuildRecord {
    pub fn new(build_date: DateTime<Utc>, host_version: String, files: Vec<ArtifactEntry>) -> Self {
        Self {
            build_date,
            host_version,
            files,
        }
    }

    /// Overwrites `path` with the indented JSON form of the record,
    /// creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Builds the record from the run's results and writes it.
pub fn write_record<R>(ctx: &mut BuildContext<'_, R>) -> Result<StageOutcome> {
    let record = BuildRecord::new(
        Utc::now(),
        ctx.host_version
            .clone()
            .unwrap_or_else(|| UNKNOWN_HOST_VERSION.to_string()),
        ctx.artifacts.clone(),
    );

    let relative = ctx.settings.record_path();
    record.write_to(&ctx.settings.resolve(relative))?;
    log::info!(
        "Wrote build record with {} artifact(s) to {}",
        record.files.len(),
        relative
    );

    ctx.record = Some(record);
    Ok(StageOutcome::pass(format!("Build info saved to {relative}")))
}

/// ISO-8601 UTC with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
