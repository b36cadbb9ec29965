//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // VM Module Errors
    // ─────────────────────────────────────────────────────────────
    #[error("VM interpreter not found: '{command}'. Ensure it is in your PATH.")]
    VmNotFound { command: String },

    #[error("Failed to load VM module: {message}")]
    VmLoad { message: String },

    #[error("Failed to instantiate VM: {message}")]
    VmInstantiate { message: String },

    #[error("VM module did not load within {timeout_ms}ms")]
    VmLoadTimeout { timeout_ms: u64 },

    #[error("Example directory is not readable: {path}")]
    ExampleDir { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn vm_not_found(command: impl Into<String>) -> Self {
        Self::VmNotFound {
            command: command.into(),
        }
    }

    pub fn vm_load(message: impl Into<String>) -> Self {
        Self::VmLoad {
            message: message.into(),
        }
    }

    pub fn vm_instantiate(message: impl Into<String>) -> Self {
        Self::VmInstantiate {
            message: message.into(),
        }
    }

    pub fn example_dir(path: impl Into<PathBuf>) -> Self {
        Self::ExampleDir { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::ExampleDir { .. }
        )
    }

    /// Check if this error ends the VM session for good.
    ///
    /// Module load failures are terminal for the session: nothing retries them.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::VmNotFound { .. }
                | Error::VmLoad { .. }
                | Error::VmInstantiate { .. }
                | Error::VmLoadTimeout { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::vm_load("missing symbol");
        assert_eq!(err.to_string(), "Failed to load VM module: missing symbol");

        let err = Error::vm_not_found("piko");
        assert!(err.to_string().contains("'piko'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_errors_are_fatal() {
        assert!(Error::vm_not_found("piko").is_fatal());
        assert!(Error::vm_load("boom").is_fatal());
        assert!(Error::vm_instantiate("boom").is_fatal());
        assert!(Error::VmLoadTimeout { timeout_ms: 10 }.is_fatal());
        assert!(!Error::config("bad").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::config("bad key").is_recoverable());
        assert!(Error::example_dir("/nope").is_recoverable());
        assert!(!Error::vm_load("boom").is_recoverable());
    }

    #[test]
    fn test_timeout_message_includes_duration() {
        let err = Error::VmLoadTimeout { timeout_ms: 2500 };
        assert!(err.to_string().contains("2500ms"));
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading examples").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
