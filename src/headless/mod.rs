//! Headless mode - NDJSON event output for scripting
//!
//! Runs a single program (or example) without the terminal UI and reports
//! each step as one JSON object per line on stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"vm_ready","examples":["fib","hello"],"timestamp":1704700001000}
//! {"event":"example_loaded","name":"fib","timestamp":1704700001002}
//! {"event":"output","kind":"output","text":"55\n","timestamp":1704700001050}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use pikopad_core::Error;
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, HeadlessInput};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// VM module loaded and instantiated
    VmReady {
        examples: Vec<String>,
        timestamp: i64,
    },

    /// VM module could not be loaded; nothing will run
    VmLoadFailed {
        message: String,
        reason: String,
        timestamp: i64,
    },

    /// Example source placed in the editor
    ExampleLoaded { name: String, timestamp: i64 },

    /// Result of running the program
    Output {
        /// `output`, `no_output` or `error`
        kind: String,
        text: String,
        timestamp: i64,
    },

    /// Request could not be served
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write the event to stdout as one NDJSON line
    pub fn emit(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write the event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn vm_ready(examples: Vec<String>) -> Self {
        Self::VmReady {
            examples,
            timestamp: Self::now(),
        }
    }

    pub fn vm_load_failed(message: &str, reason: &str) -> Self {
        Self::VmLoadFailed {
            message: message.to_string(),
            reason: reason.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn example_loaded(name: &str) -> Self {
        Self::ExampleLoaded {
            name: name.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn output(kind: &str, text: String) -> Self {
        Self::Output {
            kind: kind.to_string(),
            text,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Report an error that aborted the headless run
    pub fn from_error(error: &Error) -> Self {
        Self::error(error.to_string(), error.is_fatal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = HeadlessEvent::ExampleLoaded {
            name: "fib".to_string(),
            timestamp: 42,
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(
            json,
            r#"{"event":"example_loaded","name":"fib","timestamp":42}"#
        );
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::output("no_output", "No output".to_string())
            .write_to(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["event"], "output");
        assert_eq!(value["kind"], "no_output");
        assert_eq!(value["text"], "No output");
    }

    #[test]
    fn test_from_error_marks_load_errors_fatal() {
        let HeadlessEvent::Error { message, fatal, .. } =
            HeadlessEvent::from_error(&Error::vm_not_found("piko"))
        else {
            panic!("wrong variant");
        };
        assert!(fatal);
        assert!(message.contains("'piko'"));

        let HeadlessEvent::Error { fatal, .. } = HeadlessEvent::from_error(&Error::ChannelClosed)
        else {
            panic!("wrong variant");
        };
        assert!(!fatal);
    }

    #[test]
    fn test_timestamps_are_milliseconds() {
        let before = Utc::now().timestamp_millis();
        let HeadlessEvent::VmReady { timestamp, .. } = HeadlessEvent::vm_ready(vec![]) else {
            panic!("wrong variant");
        };
        assert!(timestamp >= before);
    }
}
