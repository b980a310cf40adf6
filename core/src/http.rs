//! HTTP types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values and classifies `HttpResponse` values; the actual round-trip runs
//! behind the `Transport` trait, so tests substitute scripted
//! implementations while production uses
//! [`UreqTransport`](crate::transport::UreqTransport).
//!
//! A received response is always data, whatever its status code. Only a
//! failure to obtain any response at all (DNS, connection refused, timeout)
//! surfaces as [`TransportError`].

use crate::error::TransportError;

/// An HTTP request described as plain data.
///
/// Every request this crate makes is a POST to the invite endpoint; only
/// the headers and body vary between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The single I/O seam of the crate.
pub trait Transport {
    /// Execute one request and return the response, however the server
    /// answered. Implementations must not turn a non-2xx status into an
    /// error — status interpretation belongs to the caller.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
