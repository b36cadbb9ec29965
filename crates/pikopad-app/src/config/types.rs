//! Configuration types for Pikopad

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global settings from `.pikopad/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub vm: VmSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Interpreter settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmSettings {
    /// Interpreter command name or path
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the source file
    #[serde(default)]
    pub args: Vec<String>,

    /// Directory holding `*.pyx` example programs, relative to the project
    #[serde(default = "default_examples_dir")]
    pub examples_dir: Option<PathBuf>,

    /// Upper bound on module loading in milliseconds (0 = wait indefinitely)
    #[serde(default)]
    pub load_timeout_ms: u64,
}

impl Default for VmSettings {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            examples_dir: default_examples_dir(),
            load_timeout_ms: 0,
        }
    }
}

impl VmSettings {
    pub fn load_timeout(&self) -> Option<Duration> {
        (self.load_timeout_ms > 0).then(|| Duration::from_millis(self.load_timeout_ms))
    }

    /// Resolve the examples directory against `project_path`
    pub fn examples_dir_in(&self, project_path: &Path) -> Option<PathBuf> {
        self.examples_dir
            .as_ref()
            .map(|dir| project_path.join(dir))
    }
}

fn default_command() -> String {
    pikopad_vm::DEFAULT_COMMAND.to_string()
}

fn default_examples_dir() -> Option<PathBuf> {
    Some(PathBuf::from("examples"))
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// View shown at startup: `code`, `examples` or `help`
    #[serde(default = "default_initial_view")]
    pub initial_view: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_view: default_initial_view(),
        }
    }
}

fn default_initial_view() -> String {
    "code".to_string()
}
