//! Engine - the AppController shared by the TUI and headless runners
//!
//! Owns the [`AppState`], the message channel and the VM loader. Hosts feed
//! it messages; background work (VM loading) reports back through the
//! channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use pikopad_core::prelude::*;
use pikopad_vm::VmLoader;

use crate::config::Settings;
use crate::message::Message;
use crate::process::process_message;
use crate::signals::spawn_signal_handler;
use crate::state::AppState;

/// Capacity of the internal message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<L> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender for background tasks
    msg_tx: mpsc::Sender<Message>,

    /// Receiver for messages from background tasks
    msg_rx: mpsc::Receiver<Message>,

    /// Produces the VM module on `Start`
    loader: Arc<L>,
}

impl<L> Engine<L>
where
    L: VmLoader + Sync + 'static,
{
    pub fn new(settings: Settings, loader: L) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            loader: Arc::new(loader),
        }
    }

    /// Begin VM initialization. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        self.process_message(Message::Start);
    }

    /// Forward SIGINT/SIGTERM as [`Message::Quit`]
    pub fn listen_for_signals(&self) {
        spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update loop
    pub fn process_message(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &self.msg_tx, &self.loader);
    }

    /// Process all messages queued by background tasks.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next background message and process it
    pub async fn process_next_message(&mut self) -> Result<()> {
        let msg = self.msg_rx.recv().await.ok_or(Error::ChannelClosed)?;
        self.process_message(msg);
        Ok(())
    }

    /// Wait until VM initialization has succeeded or failed
    pub async fn wait_for_vm(&mut self) -> Result<()> {
        while self.state.vm_status.is_loading() && !self.should_quit() {
            self.process_next_message().await?;
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
