//! Production transport backed by ureq.

use std::fmt;
use std::time::Duration;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Per-attempt timeout. An attempt that has not completed by then is
/// classified as a transport failure and the next encoding is tried.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Blocking transport over a [`ureq::Agent`].
///
/// The agent is configured so that every received status code, 4xx and 5xx
/// included, comes back as a response rather than an error — the
/// success/failure boundary is the explicit status comparison in
/// [`AttemptResult::is_success`](crate::probe::AttemptResult::is_success),
/// not transport configuration.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(ATTEMPT_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .send(request.body.as_bytes())
            .map_err(|error| match error {
                ureq::Error::Timeout(_) => TransportError::TimedOut,
                other => TransportError::Failed(other.to_string()),
            })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
