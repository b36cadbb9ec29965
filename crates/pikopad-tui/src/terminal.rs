//! Raw-mode terminal session

use ratatui::DefaultTerminal;

/// The interactive terminal, restored to cooked mode when dropped.
///
/// `ratatui::init` also installs a panic hook that restores the terminal, so
/// both normal returns and panics leave the shell usable.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter the alternate screen in raw mode
    pub fn enter() -> Self {
        Self {
            terminal: ratatui::init(),
        }
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
