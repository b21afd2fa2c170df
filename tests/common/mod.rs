//! Shared fixtures for pipeline tests

#![allow(dead_code)]

use addin_build::error::{BuildError, Result};
use addin_build::process::{CapturedOutput, CommandRunner, CommandSpec, CommandStatus};
use addin_build::settings::{Settings, SettingsBuilder};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

pub const CLEAN_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OfficeApp xmlns="http://schemas.microsoft.com/office/appforoffice/1.1">
  <Id>4b1d6a0e-2f7c-4d8e-9a51-7c3e0f2b9d14</Id>
  <ProviderName>Contoso Planning</ProviderName>
  <DisplayName DefaultValue="Planner"/>
  <SourceLocation DefaultValue="https://planner.contoso.com/taskpane.html"/>
</OfficeApp>
"#;

pub const BUILD: &str = "npm run build";
pub const INSTALL: &str = "npm install";
pub const VERSION_CHECK: &str = "node --version";

/// Sizes written by the fake build for the five default outputs.
pub const OUTPUT_SIZES: [(&str, usize); 5] = [
    ("dist/taskpane.html", 1843),
    ("dist/taskpane.js", 48213),
    ("dist/commands.html", 611),
    ("dist/commands.js", 9020),
    ("dist/manifest.xml", 2400),
];

/// A command invocation seen by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Run(String),
    Capture(String),
}

/// Command runner double: records every call, returns scripted exit codes
/// and writes files on successful runs to stand in for a real build.
pub struct RecordingRunner {
    calls: Mutex<Vec<Call>>,
    exit_codes: HashMap<String, i32>,
    unspawnable: HashSet<String>,
    writes: HashMap<String, Vec<(String, usize)>>,
    host_version: Option<String>,
}

impl RecordingRunner {
    /// Every command succeeds; the host reports `v18.17.0`.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_codes: HashMap::new(),
            unspawnable: HashSet::new(),
            writes: HashMap::new(),
            host_version: Some("v18.17.0".to_string()),
        }
    }

    /// A runner whose build produces all five default outputs.
    pub fn with_full_build() -> Self {
        OUTPUT_SIZES
            .iter()
            .fold(Self::new(), |runner, (path, size)| runner.writes(BUILD, path, *size))
    }

    pub fn exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// `command` fails before starting, like a program missing from `PATH`.
    pub fn fails_to_spawn(mut self, command: &str) -> Self {
        self.unspawnable.insert(command.to_string());
        self
    }

    pub fn writes(mut self, command: &str, path: &str, size: usize) -> Self {
        self.writes
            .entry(command.to_string())
            .or_default()
            .push((path.to_string(), size));
        self
    }

    /// `None` makes the version check fail to spawn.
    pub fn host_version(mut self, version: Option<&str>) -> Self {
        self.host_version = version.map(str::to_string);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Commands run with inherited stdio (install and build).
    pub fn runs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Run(command) => Some(command),
                Call::Capture(_) => None,
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandStatus> {
        let key = command.to_string();
        self.calls.lock().unwrap().push(Call::Run(key.clone()));
        if self.unspawnable.contains(&key) {
            return Err(BuildError::execution(key, "program not found"));
        }

        let code = self.exit_codes.get(&key).copied().unwrap_or(0);
        if code == 0 {
            for (path, size) in self.writes.get(&key).into_iter().flatten() {
                let full = cwd.join(path);
                std::fs::create_dir_all(full.parent().unwrap())?;
                std::fs::write(full, vec![b'x'; *size])?;
            }
        }
        Ok(CommandStatus::exited(code))
    }

    async fn capture(&self, command: &CommandSpec, _cwd: &Path) -> Result<CapturedOutput> {
        let key = command.to_string();
        self.calls.lock().unwrap().push(Call::Capture(key.clone()));

        match &self.host_version {
            Some(version) => Ok(CapturedOutput {
                status: CommandStatus::exited(0),
                stdout: format!("{version}\n"),
            }),
            None => Err(BuildError::execution(key, "node not found")),
        }
    }
}

/// Temporary add-in project with every required file, a clean manifest
/// and an installed dependency store.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let project = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        project.write("package.json", r#"{ "name": "planner-addin", "private": true }"#);
        project.write("webpack.config.js", "module.exports = {};\n");
        project.write("manifest.xml", CLEAN_MANIFEST);
        project.write("src/taskpane/taskpane.js", "Office.onReady(() => {});\n");
        project.write("src/taskpane/taskpane.html", "<!doctype html><title>Planner</title>\n");
        std::fs::create_dir_all(project.path().join("node_modules")).unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        let path = self.join(relative);
        if path.is_dir() {
            std::fs::remove_dir_all(path).unwrap();
        } else {
            std::fs::remove_file(path).unwrap();
        }
    }

    pub fn settings(&self) -> Settings {
        self.builder().build().unwrap()
    }

    pub fn builder(&self) -> SettingsBuilder {
        SettingsBuilder::new().working_dir(self.path())
    }

    pub fn record_path(&self) -> PathBuf {
        self.join("dist/build-info.json")
    }
}
