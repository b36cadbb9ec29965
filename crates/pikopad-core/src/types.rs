//! Core domain types for pikopad

use serde::{Deserialize, Serialize};

/// Shown in the output surface when the VM module could not be loaded or
/// instantiated. Terminal for the session.
pub const MSG_LOAD_FAILED: &str = "Failed to load VM module";

/// Shown in the output surface when a run is requested before the VM is ready.
pub const MSG_NOT_INITIALIZED: &str = "VM not initialized";

/// Shown in the output surface when a run succeeds but produces no output.
pub const MSG_NO_OUTPUT: &str = "No output";

/// Prefix that distinguishes execution failures from normal output.
pub const ERROR_PREFIX: &str = "Error: ";

/// Lifecycle phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// One of the fixed, mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Source editor and output
    #[default]
    Code,
    /// Catalog of example programs
    Examples,
    /// Key bindings and usage
    Help,
}

impl ViewId {
    /// All views, in tab order
    pub const ALL: [ViewId; 3] = [ViewId::Code, ViewId::Examples, ViewId::Help];

    /// Stable identifier used in configuration and host markup
    pub fn id(&self) -> &'static str {
        match self {
            ViewId::Code => "code",
            ViewId::Examples => "examples",
            ViewId::Help => "help",
        }
    }

    /// Title shown on the tab selector
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Code => "Code",
            ViewId::Examples => "Examples",
            ViewId::Help => "Help",
        }
    }

    /// Position in [`ViewId::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ViewId::Code => 0,
            ViewId::Examples => 1,
            ViewId::Help => 2,
        }
    }

    /// Resolve a host identifier to a view.
    ///
    /// Accepts the bare id (`"examples"`) as well as the selector and
    /// container forms (`"examples-tab"`, `"examples-view"`). Returns `None`
    /// for anything else.
    pub fn from_id(raw: &str) -> Option<ViewId> {
        let raw = raw.trim();
        let base = raw
            .strip_suffix("-tab")
            .or_else(|| raw.strip_suffix("-view"))
            .unwrap_or(raw);

        ViewId::ALL
            .into_iter()
            .find(|view| view.id().eq_ignore_ascii_case(base))
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Lifecycle of the VM module as seen by the controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VmStatus {
    /// Module load is in flight (or has not started yet)
    #[default]
    Loading,
    /// Module loaded and instance constructed
    Ready,
    /// Load or instantiation failed; no retry for this session
    Failed { reason: String },
}

impl VmStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, VmStatus::Loading)
    }

    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            VmStatus::Loading => "Loading VM…",
            VmStatus::Ready => "VM ready",
            VmStatus::Failed { .. } => "VM unavailable",
        }
    }
}
