//! # pikopad-app - Application State and Orchestration
//!
//! The controller for the Piko playground, built on the TEA pattern:
//! [`AppState`] is the model, [`handler::update`] the update function and
//! [`Engine`] the driver that owns the message channel and VM loader.
//!
//! Depends on [`pikopad_core`] for domain types and [`pikopad_vm`] for the VM
//! module contract.
//!
//! ## Public API
//!
//! ### Driver
//! - [`Engine`] - Start, message processing, background message draining
//!
//! ### TEA Pattern
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible application events
//! - [`handler::update`] - State transition function
//! - [`UpdateAction`], [`UpdateResult`] - Side effects requested by `update`
//!
//! ### Components
//! - [`ViewStateMachine`] - Active view (code, examples, help)
//! - [`SourceBuffer`] - Editable source text and program input
//! - [`ExecutionOutcome`] - Rendered result of one run
//!
//! ### Configuration
//! - [`config::Settings`] - Loaded from `.pikopad/config.toml`
//! - [`config::load_settings`], [`config::init_config_dir`]

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod source_buffer;
pub mod state;
pub mod view_state;

pub use engine::Engine;
pub use handler::{update, ExecutionOutcome, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use source_buffer::{EditCommand, SourceBuffer};
pub use state::{AppState, EditorFocus, ExampleListState};
pub use view_state::ViewStateMachine;
