//! Terminal-independent key events.
//!
//! Hosts convert their native key events into [`InputKey`] so the controller
//! never depends on a terminal library.

/// A key press as seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_chars_differ_from_plain_chars() {
        assert_eq!(InputKey::CharCtrl('r'), InputKey::CharCtrl('r'));
        assert_ne!(InputKey::CharCtrl('r'), InputKey::Char('r'));
    }

    #[test]
    fn test_function_keys_compare_by_number() {
        assert_eq!(InputKey::F(5), InputKey::F(5));
        assert_ne!(InputKey::F(1), InputKey::F(2));
    }
}
