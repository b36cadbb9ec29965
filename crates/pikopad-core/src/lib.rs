//! # pikopad-core - Core Domain Types
//!
//! Foundation crate for pikopad. Provides domain types, error handling and
//! logging setup shared by the VM binding, the application core and the
//! terminal host.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ViewId`] - One of the fixed views (code, examples, help)
//! - [`VmStatus`] - Lifecycle of the VM module (Loading, Ready, Failed)
//! - [`AppPhase`] - Whether the controller is running or quitting
//! - Fixed user-facing messages ([`MSG_LOAD_FAILED`], [`MSG_NOT_INITIALIZED`],
//!   [`MSG_NO_OUTPUT`], [`ERROR_PREFIX`])
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pikopad_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all pikopad crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    AppPhase, ViewId, VmStatus, ERROR_PREFIX, MSG_LOAD_FAILED, MSG_NOT_INITIALIZED, MSG_NO_OUTPUT,
};
