//! Diagnostic sink for mapper error paths.
//!
//! Mappers never fail on a malformed collection response. They report it to
//! a sink and degrade to an empty result instead.

use std::sync::Mutex;

use serde_json::Value;

/// Receives diagnostics from collection mappers.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a response whose shape did not match the expected one.
    fn shape_mismatch(&self, message: &str, received: &Value);
}

/// Sink that forwards diagnostics to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn shape_mismatch(&self, message: &str, received: &Value) {
        tracing::error!(received = %received, "{}", message);
    }
}

/// Sink that keeps every diagnostic in memory.
///
/// Used by tests and by callers that surface mapping problems themselves.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(String, Value)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded `(message, received)` pairs.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn shape_mismatch(&self, message: &str, received: &Value) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((message.to_string(), received.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.shape_mismatch("first", &json!(1));
        sink.shape_mismatch("second", &json!("two"));

        assert_eq!(
            sink.entries(),
            vec![
                ("first".to_string(), json!(1)),
                ("second".to_string(), json!("two")),
            ]
        );
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        TracingSink.shape_mismatch("Expected array for rooms, got:", &json!({"a": 1}));
    }
}
