//! Delivery orchestration over the attempt catalog.
//!
//! # Design
//! `NotifyClient` holds the configuration and a transport; each `deliver`
//! call walks the catalog strictly in order, one attempt at a time, and
//! returns on the first attempt the external service accepts. Rejected
//! attempts and transport failures are logged and skipped, never
//! propagated; exhausting the catalog produces the fixed 502-shaped
//! failure outcome. Attempts stay sequential: the probe order is part of
//! the contract, and probing encodings concurrently could deliver the same
//! message twice if the service happened to accept more than one of them.

use tracing::{debug, error, info, warn};

use crate::auth::AuthHeaders;
use crate::catalog::ATTEMPTS;
use crate::config::NotifyConfig;
use crate::http::Transport;
use crate::probe::{build_attempt, send_attempt};
use crate::transport::UreqTransport;
use crate::types::DeliveryOutcome;

/// Client for the external race-update invite API.
///
/// Holds the configuration and the transport used for every attempt. The
/// default transport is [`UreqTransport`]; tests inject their own
/// [`Transport`] implementation through [`NotifyClient::with_transport`].
#[derive(Debug, Clone)]
pub struct NotifyClient<T = UreqTransport> {
    base_url: String,
    config: NotifyConfig,
    transport: T,
}

impl NotifyClient {
    /// Client with the production HTTP transport.
    pub fn new(config: NotifyConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> NotifyClient<T> {
    pub fn with_transport(config: NotifyConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            transport,
        }
    }

    /// URL every attempt posts to.
    fn invite_url(&self) -> String {
        format!("{}/api/invite", self.base_url)
    }

    /// Deliver a race update to `recipient` through the external service.
    ///
    /// Walks the catalog in order and returns on the first accepted
    /// attempt. Inputs are forwarded as-is — even empty strings produce the
    /// full probe sequence; validating them is the caller's job. `deliver`
    /// never fails with an error: the worst case is the fixed 502-shaped
    /// outcome after all fourteen attempts are rejected.
    pub fn deliver(&self, recipient: &str, message: &str) -> DeliveryOutcome {
        let url = self.invite_url();
        let auth = AuthHeaders::from_config(&self.config);

        for (index, spec) in ATTEMPTS.iter().enumerate() {
            debug!(
                attempt = index,
                encoding = ?spec.encoding,
                address_field = spec.address_field,
                content_field = spec.content_field,
                recipient,
                "sending invite attempt"
            );

            let request = build_attempt(&url, spec, recipient, message, &auth);
            let result = send_attempt(&self.transport, index, &request);

            match &result.outcome {
                Ok(response) if result.is_success() => {
                    info!(
                        attempt = index,
                        status = response.status,
                        recipient,
                        "race update delivered"
                    );
                    return DeliveryOutcome::accepted(response.status, &response.body);
                }
                Ok(response) => {
                    warn!(
                        attempt = index,
                        status = response.status,
                        body = %response.body,
                        "invite attempt rejected"
                    );
                }
                Err(transport_error) => {
                    warn!(
                        attempt = index,
                        error = %transport_error,
                        "invite attempt failed in transport"
                    );
                }
            }
        }

        error!(recipient, "all invite attempts failed");
        DeliveryOutcome::exhausted()
    }
}
