//! Message types for the application (TEA pattern)

use pikopad_core::ViewId;
use pikopad_vm::ModuleHandle;

use crate::input_key::InputKey;
use crate::source_buffer::EditCommand;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Host finished wiring; begin VM initialization
    Start,
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates
    Tick,
    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Controller Operations
    // ─────────────────────────────────────────────────────────
    /// Execute the current source text
    RunCode,
    /// Make a view active
    SelectView(ViewId),
    /// Load a named example into the editor
    LoadExample { name: String },
    /// Load the example highlighted in the examples list
    LoadSelectedExample,
    ExampleSelectNext,
    ExampleSelectPrevious,
    /// Edit the focused text input
    Edit(EditCommand),
    /// Switch edits between the source and the program input
    ToggleInputFocus,

    // ─────────────────────────────────────────────────────────
    // VM Initialization
    // ─────────────────────────────────────────────────────────
    /// The VM module finished loading
    VmModuleLoaded(ModuleHandle),
    /// The VM module could not be loaded
    VmLoadFailed { reason: String },
}
