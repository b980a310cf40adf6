//! Delivery client for race-update notifications via an external invite API.
//!
//! # Overview
//! The external service's request schema is loosely specified and changes
//! without notice, so a delivery is probed: a fixed catalog of fourteen
//! request encodings (seven JSON field-name variants, then the same seven
//! form-urlencoded) is tried in order until the service accepts one. If
//! every encoding is rejected, the client returns a deterministic
//! 502-shaped failure value — it never raises.
//!
//! # Design
//! - The catalog is a const table ([`catalog::ATTEMPTS`]); changing the
//!   probe sequence is a data edit, not new control flow.
//! - Requests and responses are plain data behind the [`Transport`] trait;
//!   the success/failure boundary is an explicit status comparison, not
//!   transport configuration.
//! - Configuration is threaded in explicitly ([`NotifyConfig`]); the crate
//!   reads no ambient state.
//! - [`NotifyClient::deliver`] is infallible by construction: rejected
//!   attempts and transport failures are logged via `tracing` and folded
//!   into the final [`DeliveryOutcome`].

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod probe;
pub mod transport;
pub mod types;

pub use auth::AuthHeaders;
pub use catalog::{AttemptSpec, Encoding, ATTEMPTS};
pub use client::NotifyClient;
pub use config::NotifyConfig;
pub use error::TransportError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use probe::{build_attempt, send_attempt, AttemptResult};
pub use transport::{UreqTransport, ATTEMPT_TIMEOUT};
pub use types::DeliveryOutcome;
