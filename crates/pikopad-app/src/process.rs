//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use pikopad_vm::VmLoader;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function, following up
/// chained messages and dispatching any resulting actions
pub fn process_message<L>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    loader: &Arc<L>,
) where
    L: VmLoader + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(loader),
                state.settings.vm.load_timeout(),
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
