//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use pikopad_core::Error;
use pikopad_vm::VmLoader;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<L>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    loader: Arc<L>,
    load_timeout: Option<Duration>,
) where
    L: VmLoader + Sync + 'static,
{
    match action {
        UpdateAction::InitializeVm => {
            spawn_vm_initialization(loader, load_timeout, msg_tx);
        }
    }
}

/// Load the VM module in the background and report the result as a message
pub fn spawn_vm_initialization<L>(
    loader: Arc<L>,
    load_timeout: Option<Duration>,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()>
where
    L: VmLoader + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = initialize_vm(loader.as_ref(), load_timeout).await;
        if msg_tx.send(msg).await.is_err() {
            warn!("VM initialization finished after the event loop stopped");
        }
    })
}

/// Await the loader, optionally bounded by `load_timeout`
pub async fn initialize_vm<L: VmLoader>(loader: &L, load_timeout: Option<Duration>) -> Message {
    let result = match load_timeout {
        Some(limit) => match tokio::time::timeout(limit, loader.load()).await {
            Ok(result) => result,
            Err(_) => Err(Error::VmLoadTimeout {
                timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
        None => loader.load().await,
    };

    match result {
        Ok(module) => {
            info!("VM module loaded");
            Message::VmModuleLoaded(module)
        }
        Err(e) => Message::VmLoadFailed {
            reason: e.to_string(),
        },
    }
}
