//! The outcome type returned by the delivery client.

use serde_json::{json, Value};

/// Final result of a delivery call.
///
/// `success` is true iff some attempt received a 2xx response; `status` and
/// `data` are then that response's status and body. On exhaustion `status`
/// is 502 and `data` is a fixed failure message, so callers can surface the
/// outcome directly as a gateway-style error at their own boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOutcome {
    pub success: bool,
    pub status: u16,
    pub data: Value,
}

impl DeliveryOutcome {
    /// Outcome for the attempt the external service accepted.
    pub(crate) fn accepted(status: u16, body: &str) -> Self {
        Self {
            success: true,
            status,
            data: parse_body(body),
        }
    }

    /// The deterministic outcome after every attempt has failed.
    pub(crate) fn exhausted() -> Self {
        Self {
            success: false,
            status: 502,
            data: json!({ "message": "Failed to send via external service" }),
        }
    }
}

/// Response bodies are JSON when the external service behaves, but nothing
/// guarantees it; anything unparseable is preserved verbatim as a string.
fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
