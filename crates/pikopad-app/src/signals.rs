//! Shutdown signals forwarded to the controller

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use pikopad_core::prelude::*;

use crate::message::Message;

/// Forward the first SIGINT/SIGTERM (Ctrl+C on Windows) as [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(quit_on(wait_for_shutdown(), tx))
}

/// Send [`Message::Quit`] once `shutdown` resolves to the signal's name
async fn quit_on<F>(shutdown: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<&'static str>>,
{
    match shutdown.await {
        Ok(name) => {
            info!("{} received, quitting", name);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Controller stopped before the quit request");
            }
        }
        Err(e) => warn!("Shutdown signals unavailable: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(listener_error)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(listener_error)?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(windows)]
async fn wait_for_shutdown() -> Result<&'static str> {
    tokio::signal::ctrl_c().await.map_err(listener_error)?;
    Ok("Ctrl+C")
}

fn listener_error(e: std::io::Error) -> Error {
    Error::terminal(format!("cannot listen for signals: {}", e))
}
