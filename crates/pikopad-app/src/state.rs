//! Application state (Model in TEA pattern)

use pikopad_core::{AppPhase, VmStatus};
use pikopad_vm::{ModuleHandle, VmHandle};

use crate::config::Settings;
use crate::handler::ExecutionOutcome;
use crate::source_buffer::SourceBuffer;
use crate::view_state::ViewStateMachine;

/// Selection within the examples list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleListState {
    pub names: Vec<String>,
    pub selected: usize,
}

impl ExampleListState {
    pub fn set_names(&mut self, names: Vec<String>) {
        self.names = names;
        self.selected = 0;
    }

    /// Move the selection down, wrapping at the end
    pub fn select_next(&mut self) {
        if !self.names.is_empty() {
            self.selected = (self.selected + 1) % self.names.len();
        }
    }

    /// Move the selection up, wrapping at the start
    pub fn select_previous(&mut self) {
        if !self.names.is_empty() {
            self.selected = (self.selected + self.names.len() - 1) % self.names.len();
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }
}

/// Which text input of the code view receives edits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorFocus {
    #[default]
    Source,
    /// Program input fed to reads during a run
    Input,
}

impl EditorFocus {
    pub fn toggle(self) -> Self {
        match self {
            EditorFocus::Source => EditorFocus::Input,
            EditorFocus::Input => EditorFocus::Source,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,

    /// Which view is active
    pub views: ViewStateMachine,

    /// Source text being edited
    pub editor: SourceBuffer,

    /// Program input handed to the VM on each run
    pub program_input: SourceBuffer,

    /// Buffer that receives edit commands
    pub focus: EditorFocus,

    /// Text shown in the output pane
    pub output: String,

    /// Outcome of the last run that reached the VM
    pub last_outcome: Option<ExecutionOutcome>,

    /// VM initialization status
    pub vm_status: VmStatus,

    /// Examples view list
    pub examples: ExampleListState,

    /// Whether `Start` has been processed
    pub started: bool,

    /// Tick counter for the loading spinner
    pub tick_count: u64,

    /// Loaded VM module, owner of the example catalog
    pub(crate) module: Option<ModuleHandle>,

    /// Initialized VM instance
    pub(crate) vm: Option<VmHandle>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let views = ViewStateMachine::from_config(&settings.ui.initial_view);
        Self {
            phase: AppPhase::default(),
            settings,
            views,
            editor: SourceBuffer::new(),
            program_input: SourceBuffer::new(),
            focus: EditorFocus::default(),
            output: String::new(),
            last_outcome: None,
            vm_status: VmStatus::default(),
            examples: ExampleListState::default(),
            started: false,
            tick_count: 0,
            module: None,
            vm: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether the VM instance is available for execution
    pub fn has_vm(&self) -> bool {
        self.vm.is_some()
    }

    /// Whether the module (and its example catalog) is available
    pub fn has_module(&self) -> bool {
        self.module.is_some()
    }

    /// The buffer edit commands apply to
    pub fn focused_buffer(&self) -> &SourceBuffer {
        match self.focus {
            EditorFocus::Source => &self.editor,
            EditorFocus::Input => &self.program_input,
        }
    }

    pub fn focused_buffer_mut(&mut self) -> &mut SourceBuffer {
        match self.focus {
            EditorFocus::Source => &mut self.editor,
            EditorFocus::Input => &mut self.program_input,
        }
    }
}
