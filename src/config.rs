use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use crate::error::{NpbError, Result};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Settings used to build an [`NpbClient`](crate::NpbClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub user_agent: String,
    pub accept_language: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// How long a fetched roster stays cached.
    pub roster_ttl: Duration,
    /// How long fetched player details stay cached.
    pub details_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_language: "ja,en;q=0.9".to_string(),
            timeout: Duration::from_secs(30),
            roster_ttl: Duration::from_secs(60 * 60),
            details_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl ClientConfig {
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&self.accept_language)?);

        reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(NpbError::HttpClient)
    }
}
