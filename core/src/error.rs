//! Error types for the delivery client.
//!
//! # Design
//! A `TransportError` means no HTTP response was obtained at all. A response
//! carrying a rejecting status code is not an error anywhere in this crate —
//! it is classified by comparing `HttpResponse::status` explicitly. Nothing
//! here propagates past `NotifyClient::deliver`, which folds every failure
//! into the final `DeliveryOutcome`.

use thiserror::Error;

/// Failure to obtain any HTTP response for a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The attempt did not complete within the per-attempt timeout.
    #[error("request timed out")]
    TimedOut,

    /// DNS failure, connection refused, or any other failure that prevented
    /// a response from being received.
    #[error("{0}")]
    Failed(String),
}
