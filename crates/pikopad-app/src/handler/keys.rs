//! Key event handlers for each view

use pikopad_core::ViewId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::source_buffer::EditCommand;
use crate::state::AppState;

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.views.active() {
        ViewId::Code => handle_key_code(key),
        ViewId::Examples => handle_key_examples(key),
        ViewId::Help => handle_key_help(key),
    }
}

/// Bindings available in every view
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),
        InputKey::F(5) | InputKey::CharCtrl('r') => Some(Message::RunCode),
        InputKey::F(1) => Some(Message::SelectView(ViewId::Code)),
        InputKey::F(2) => Some(Message::SelectView(ViewId::Examples)),
        InputKey::F(3) => Some(Message::SelectView(ViewId::Help)),
        _ => None,
    }
}

/// Editing keys in the code view
fn handle_key_code(key: InputKey) -> Option<Message> {
    let command = match key {
        InputKey::Char(c) => EditCommand::Insert(c),
        InputKey::Enter => EditCommand::Newline,
        InputKey::Tab => EditCommand::Indent,
        InputKey::Backspace => EditCommand::Backspace,
        InputKey::Delete => EditCommand::Delete,
        InputKey::Left => EditCommand::Left,
        InputKey::Right => EditCommand::Right,
        InputKey::Up => EditCommand::Up,
        InputKey::Down => EditCommand::Down,
        InputKey::Home => EditCommand::Home,
        InputKey::End => EditCommand::End,
        InputKey::F(4) => return Some(Message::ToggleInputFocus),
        _ => return None,
    };
    Some(Message::Edit(command))
}

fn handle_key_examples(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::ExampleSelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::ExampleSelectPrevious),
        InputKey::Enter => Some(Message::LoadSelectedExample),
        InputKey::Esc => Some(Message::SelectView(ViewId::Code)),
        _ => None,
    }
}

fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SelectView(ViewId::Code)),
        _ => None,
    }
}
