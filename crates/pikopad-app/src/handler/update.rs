//! Main update function - handles state transitions (TEA pattern)

use pikopad_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{examples, execution, keys::handle_key, lifecycle, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Start => lifecycle::handle_start(state),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.vm_status.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Controller Operations
        // ─────────────────────────────────────────────────────────
        Message::RunCode => {
            execution::run_code(state);
            UpdateResult::none()
        }

        Message::SelectView(view) => {
            state.views.activate(view);
            UpdateResult::none()
        }

        Message::LoadExample { name } => {
            examples::load_example(state, &name);
            UpdateResult::none()
        }

        Message::LoadSelectedExample => match state.examples.selected_name() {
            Some(name) => UpdateResult::message(Message::LoadExample {
                name: name.to_string(),
            }),
            None => UpdateResult::none(),
        },

        Message::ExampleSelectNext => {
            state.examples.select_next();
            UpdateResult::none()
        }

        Message::ExampleSelectPrevious => {
            state.examples.select_previous();
            UpdateResult::none()
        }

        Message::Edit(command) => {
            state.focused_buffer_mut().apply(command);
            UpdateResult::none()
        }

        Message::ToggleInputFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // VM Initialization
        // ─────────────────────────────────────────────────────────
        Message::VmModuleLoaded(module) => {
            lifecycle::handle_module_loaded(state, module);
            UpdateResult::none()
        }

        Message::VmLoadFailed { reason } => {
            lifecycle::handle_load_failed(state, reason);
            UpdateResult::none()
        }
    }
}
