//! Full-frame rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use pikopad_app::{update, EditCommand, Message};
use pikopad_core::VmStatus;
use pikopad_vm::test_utils::{ScriptedModule, ScriptedRun};

fn ready_state(module: ScriptedModule) -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::Start);
    update(&mut state, Message::VmModuleLoaded(module.into_handle()));
    state
}

#[test]
fn test_code_view_shows_editor_and_output() {
    let mut state = ready_state(
        ScriptedModule::new().with_runs([ScriptedRun::Output("hi".to_string())]),
    );
    state.editor.set_text("print(\"hi\")");
    update(&mut state, Message::RunCode);

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Source"));
    assert!(term.buffer_contains("print(\"hi\")"));
    assert!(term.buffer_contains("Output"));
    assert!(term.buffer_contains("VM ready"));
}

#[test]
fn test_switching_views_changes_body() {
    let mut state = ready_state(ScriptedModule::new().with_example("fib", "fib(10)"));

    update(&mut state, Message::SelectView(ViewId::Examples));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("fib"));
    assert!(!term.buffer_contains("Source"));

    update(&mut state, Message::SelectView(ViewId::Help));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Run the program"));
    assert!(!term.buffer_contains("fib"));
}

#[test]
fn test_load_failure_rendered_in_output() {
    let mut state = AppState::new();
    update(&mut state, Message::Start);
    update(
        &mut state,
        Message::VmLoadFailed {
            reason: "piko not found".to_string(),
        },
    );

    let mut term = TestTerminal::with_size(100, 24);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Failed to load VM module"));
    assert!(term.buffer_contains("VM unavailable"));
    assert!(matches!(state.vm_status, VmStatus::Failed { .. }));
}

#[test]
fn test_cursor_placed_in_editor() {
    let mut state = AppState::new();
    state.editor.set_text("ab");

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    // Narrow layout: editor starts at row 4 (header 3 + tabs 1), border adds 1
    assert_eq!(term.cursor(), (1 + 3 + 2, 5));
}

#[test]
fn test_cursor_follows_program_input_focus() {
    let mut state = AppState::new();
    state.editor.set_text("(i name)");
    update(&mut state, Message::ToggleInputFocus);
    update(&mut state, Message::Edit(EditCommand::Insert('p')));

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    let code = layout::split_code_view(layout::create(term.area()).body);
    // Border (1) + gutter "NN " (3) + "p" (1)
    assert_eq!(term.cursor(), (code.input.x + 5, code.input.y + 1));
    assert!(term.buffer_contains("Input (F4)"));
    assert!(term.buffer_contains("(i name)"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let state = AppState::new();
    let mut term = TestTerminal::with_size(20, 6);
    term.draw_with(|frame| view(frame, &state));
}
