//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per active view
//! - `execution`: Run the current source on the VM
//! - `examples`: Load example programs into the editor
//! - `lifecycle`: Start and VM initialization outcome

pub(crate) mod examples;
pub(crate) mod execution;
pub(crate) mod keys;
pub(crate) mod lifecycle;
pub(crate) mod update;


use crate::message::Message;

pub use execution::ExecutionOutcome;
pub use update::update;

/// Actions that the event loop should perform after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Load and instantiate the VM module in the background
    InitializeVm,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
