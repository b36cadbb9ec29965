//! Run the current source text on the VM

use pikopad_core::prelude::*;
use pikopad_core::{ERROR_PREFIX, MSG_NOT_INITIALIZED, MSG_NO_OUTPUT};
use pikopad_vm::VmHandle;

use crate::state::AppState;

/// Result of one execution, in rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Execution succeeded with non-empty output
    Output(String),
    /// Execution succeeded without output
    NoOutput,
    /// Execution failed with this description
    Failed(String),
}

impl ExecutionOutcome {
    /// Text written to the output pane
    pub fn render(&self) -> String {
        match self {
            Self::Output(text) => text.clone(),
            Self::NoOutput => MSG_NO_OUTPUT.to_string(),
            Self::Failed(description) => format!("{}{}", ERROR_PREFIX, description),
        }
    }

    /// Short tag used in machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Output(_) => "output",
            Self::NoOutput => "no_output",
            Self::Failed(_) => "error",
        }
    }
}

/// Execute `source` with `input` as program input and collect its output.
/// Failures never escape.
pub fn execute(vm: &mut VmHandle, source: &str, input: &str) -> ExecutionOutcome {
    vm.set_input(input);
    match vm.execute(source) {
        Ok(()) => match vm.get_output() {
            Some(text) if !text.is_empty() => ExecutionOutcome::Output(text),
            _ => ExecutionOutcome::NoOutput,
        },
        Err(e) => ExecutionOutcome::Failed(e.description().to_string()),
    }
}

/// Run the editor contents and write the result into the output pane.
///
/// Without an initialized VM only the "not initialized" message is written.
/// Returns the outcome when the VM was invoked.
pub fn run_code(state: &mut AppState) -> Option<ExecutionOutcome> {
    let Some(vm) = state.vm.as_mut() else {
        debug!("Run requested before VM initialization");
        state.output = MSG_NOT_INITIALIZED.to_string();
        state.last_outcome = None;
        return None;
    };

    let outcome = execute(vm, state.editor.text(), state.program_input.text());
    debug!("Run finished: {}", outcome.kind());
    state.output = outcome.render();
    state.last_outcome = Some(outcome.clone());
    Some(outcome)
}
