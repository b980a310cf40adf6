//! Client configuration.
//!
//! # Design
//! The configuration arrives fully formed from the caller; this crate never
//! reads environment variables or any other ambient state. How the values
//! are loaded (env, config file, secrets manager) is the caller's concern.

use serde::Deserialize;

/// Configuration for the external invite API.
///
/// Only `base_url` is required. Each credential that is present is attached
/// to every attempt as its own header; see
/// [`AuthHeaders`](crate::auth::AuthHeaders).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifyConfig {
    /// Base URL of the external service, without the `/api/invite` suffix.
    pub base_url: String,

    /// Sent as `Authorization: Bearer <token>` when present.
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Sent as `x-api-key` when present.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sent as `Cookie` when present.
    #[serde(default)]
    pub cookie: Option<String>,
}
