//! Optional authentication headers derived from configuration.

use crate::config::NotifyConfig;

/// Authentication headers for one delivery call.
///
/// Built once per call and attached to every attempt. A credential absent
/// from the configuration is omitted entirely, never sent as an empty
/// header value. Credential contents are not validated here — a malformed
/// credential simply produces rejected attempts downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    pub authorization: Option<String>,
    pub api_key: Option<String>,
    pub cookie: Option<String>,
}

impl AuthHeaders {
    /// Derive headers from configuration. Pure function; any subset of the
    /// three credentials may be present, including none or all.
    pub fn from_config(config: &NotifyConfig) -> Self {
        Self {
            authorization: config
                .bearer_token
                .as_ref()
                .map(|token| format!("Bearer {token}")),
            api_key: config.api_key.clone(),
            cookie: config.cookie.clone(),
        }
    }

    /// Header pairs to append to a request, in a stable order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(authorization) = &self.authorization {
            pairs.push(("Authorization".to_string(), authorization.clone()));
        }
        if let Some(api_key) = &self.api_key {
            pairs.push(("x-api-key".to_string(), api_key.clone()));
        }
        if let Some(cookie) = &self.cookie {
            pairs.push(("Cookie".to_string(), cookie.clone()));
        }
        pairs
    }
}
