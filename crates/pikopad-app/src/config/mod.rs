//! Configuration file parsing for Pikopad
//!
//! Reads `.pikopad/config.toml` from the project directory.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_FILENAME, PIKOPAD_DIR};
pub use types::*;
