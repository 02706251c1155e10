//! Reporting of programming mistakes detected at runtime.
//!
//! Components never reach for a global logger. Anything that can notice a
//! coding error (duplicate keys, messages that make no sense in the current
//! state) receives a [`SharedDiagnostics`] when it is built and reports
//! through it. Hosts decide what a report means: a log line, a debug
//! overlay, a test failure.

use alloc::sync::Arc;
#[cfg(any(test, feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::fmt::Debug;

/// Tracing target used by [`TracingDiagnostics`].
pub const CODING_ERROR_TARGET: &str = "viewkit::coding_error";

/// Sink for coding errors detected by components.
pub trait Diagnostics: Debug {
    /// Reports a programming mistake made by the integrating application.
    fn coding_error(&self, message: &str);
}

/// Reference-counted diagnostics handle passed to components.
pub type SharedDiagnostics = Arc<dyn Diagnostics + Send + Sync>;

/// Forwards coding errors to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn coding_error(&self, message: &str) {
        tracing::error!(target: CODING_ERROR_TARGET, "{message}");
    }
}

impl TracingDiagnostics {
    /// Returns a shared handle to the tracing sink.
    #[must_use]
    pub fn shared() -> SharedDiagnostics {
        Arc::new(Self)
    }
}

/// Keeps every reported message in memory.
///
/// Useful in tests, and in hosts that surface errors in a debug panel.
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "std"))]
impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages reported so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "std"))]
impl Diagnostics for RecordingDiagnostics {
    fn coding_error(&self, message: &str) {
        tracing::debug!(target: CODING_ERROR_TARGET, recorded = %message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_messages_in_order() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.coding_error("first");
        diagnostics.coding_error("second");

        assert_eq!(diagnostics.messages(), ["first", "second"]);
    }

    #[test]
    fn shared_handle_is_usable_as_trait_object() {
        let recorder = Arc::new(RecordingDiagnostics::new());
        let shared: SharedDiagnostics = recorder.clone();
        shared.coding_error("duplicate key");

        assert_eq!(recorder.messages().len(), 1);
    }

    #[test]
    fn tracing_handles_share_one_sink_type() {
        let first = TracingDiagnostics::shared();
        let second = Arc::clone(&first);
        second.coding_error("reported without a subscriber");

        assert_eq!(Arc::strong_count(&first), 2);
        assert_eq!(alloc::format!("{first:?}"), "TracingDiagnostics");
    }
}
