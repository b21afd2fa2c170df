//! Configuration for a build run.
//!
//! Everything the pipeline needs (working directory, file sets, commands,
//! output paths) is carried by [`Settings`] and injected into the
//! orchestrator. Nothing is read from the process environment once the
//! settings have been built.
//!
//! Settings are layered: built-in defaults for the add-in project, then an
//! optional TOML [`SettingsFile`], then command line arguments.

mod builder;
mod core;
mod defaults;
mod file;

pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use file::{DEFAULT_SETTINGS_FILE, SettingsFile};
