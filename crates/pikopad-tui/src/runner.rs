//! Main TUI runner - entry point and event loop

use pikopad_app::Engine;
use pikopad_core::prelude::*;
use pikopad_vm::VmLoader;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Must be called from within a tokio runtime; VM loading runs as a
/// background task while the interface is already interactive.
pub fn run<L>(engine: &mut Engine<L>) -> Result<()>
where
    L: VmLoader + Sync + 'static,
{
    let mut session = terminal::TerminalSession::enter();

    engine.listen_for_signals();
    engine.start();

    run_loop(session.terminal(), engine)
}

/// Main event loop
fn run_loop<L>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<L>) -> Result<()>
where
    L: VmLoader + Sync + 'static,
{
    while !engine.should_quit() {
        // Messages from background tasks (VM loader, signal handler)
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Exiting TUI");
    Ok(())
}
