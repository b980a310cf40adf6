//! The ordered catalog of request encodings to probe.
//!
//! # Design
//! The external invite API's request schema is not reliably documented and
//! has changed without notice, so delivery probes a fixed sequence of
//! plausible encodings: seven JSON field-name variants, then the same seven
//! pairs form-urlencoded. This table is the single source of truth for that
//! sequence — supporting a fifteenth variant is a row edit here, not new
//! control flow. Order is load-bearing: attempts run top to bottom and the
//! first accepted one wins.

/// Request body serialization family for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Form,
}

/// One row of the catalog: an encoding plus the wire names used for the
/// recipient address and the message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptSpec {
    pub encoding: Encoding,
    pub address_field: &'static str,
    pub content_field: &'static str,
}

const fn json(address_field: &'static str, content_field: &'static str) -> AttemptSpec {
    AttemptSpec {
        encoding: Encoding::Json,
        address_field,
        content_field,
    }
}

const fn form(address_field: &'static str, content_field: &'static str) -> AttemptSpec {
    AttemptSpec {
        encoding: Encoding::Form,
        address_field,
        content_field,
    }
}

/// Every attempt made for a single delivery, in probe order. An attempt's
/// index is its position in this array.
pub const ATTEMPTS: [AttemptSpec; 14] = [
    json("recipientEmail", "message"),
    json("email", "message"),
    json("to", "message"),
    json("inviteeEmail", "message"),
    json("recipient", "message"),
    json("recipientEmail", "content"),
    json("email", "content"),
    form("recipientEmail", "message"),
    form("email", "message"),
    form("to", "message"),
    form("inviteeEmail", "message"),
    form("recipient", "message"),
    form("recipientEmail", "content"),
    form("email", "content"),
];
