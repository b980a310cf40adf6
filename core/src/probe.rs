//! Building and executing a single delivery attempt.
//!
//! # Design
//! An attempt is one catalog row turned into one HTTP request and exactly
//! one transport call — no retries live at this level. Classification is an
//! explicit status comparison on the returned data: a 2xx response is a
//! success, anything else (including a transport failure) is a failed
//! attempt for the orchestrator to move past.

use serde_json::Value;

use crate::auth::AuthHeaders;
use crate::catalog::{AttemptSpec, Encoding};
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Result of one attempt against the invite endpoint.
#[derive(Debug)]
pub struct AttemptResult {
    /// Position of the attempt in the catalog.
    pub index: usize,
    /// The response, or the transport failure that prevented one.
    pub outcome: Result<HttpResponse, TransportError>,
}

impl AttemptResult {
    /// An attempt succeeds iff a response was received and its status is in
    /// `[200, 300)`. Everything else — 3xx, 4xx, 5xx, or no response at
    /// all — is a failed attempt, never an exception.
    pub fn is_success(&self) -> bool {
        matches!(&self.outcome, Ok(response) if (200..300).contains(&response.status))
    }
}

/// Build the request for one catalog row.
///
/// The body maps the recipient and message onto the row's wire field names,
/// serialized per the row's encoding. Headers carry the matching
/// `Content-Type`, `Accept: application/json`, and any auth headers.
pub fn build_attempt(
    url: &str,
    spec: &AttemptSpec,
    recipient: &str,
    message: &str,
    auth: &AuthHeaders,
) -> HttpRequest {
    let (content_type, body) = match spec.encoding {
        Encoding::Json => ("application/json", json_body(spec, recipient, message)),
        Encoding::Form => (
            "application/x-www-form-urlencoded",
            form_body(spec, recipient, message),
        ),
    };

    let mut headers = vec![
        ("Content-Type".to_string(), content_type.to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ];
    headers.extend(auth.pairs());

    HttpRequest {
        url: url.to_string(),
        headers,
        body,
    }
}

/// Execute one built attempt: exactly one transport call, no retries.
pub fn send_attempt(
    transport: &impl Transport,
    index: usize,
    request: &HttpRequest,
) -> AttemptResult {
    AttemptResult {
        index,
        outcome: transport.execute(request),
    }
}

fn json_body(spec: &AttemptSpec, recipient: &str, message: &str) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert(
        spec.address_field.to_string(),
        Value::String(recipient.to_string()),
    );
    payload.insert(
        spec.content_field.to_string(),
        Value::String(message.to_string()),
    );
    Value::Object(payload).to_string()
}

fn form_body(spec: &AttemptSpec, recipient: &str, message: &str) -> String {
    // Two string pairs cannot fail to encode.
    serde_urlencoded::to_string(&[
        (spec.address_field, recipient),
        (spec.content_field, message),
    ])
    .unwrap_or_default()
}
