//! HTTP client configuration and building logic
//!
//! This module handles the configuration and construction of the HTTP client
//! used to reach the README generation service.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{http, service};
use crate::errors::{TransportError, TransportResult};

/// Configuration for the generation service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the generation service (scheme, host, optional path prefix)
    pub service_url: String,
    /// Path of the generation endpoint, appended to `service_url`
    pub endpoint_path: String,
    /// Whole-request timeout; unset leaves it to the transport
    pub request_timeout: Option<Duration>,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// TCP nodelay (disable Nagle's algorithm)
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: service::DEFAULT_BASE_URL.to_string(),
            endpoint_path: service::GENERATE_PATH.to_string(),
            request_timeout: None,
            connect_timeout: http::CONNECT_TIMEOUT,
            tcp_nodelay: true,
            pool_idle_timeout: Some(http::POOL_IDLE_TIMEOUT),
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    pub fn build_http_client(&self) -> TransportResult<Client> {
        let mut client_builder = Client::builder()
            .connect_timeout(self.connect_timeout)
            .user_agent(http::USER_AGENT)
            .tcp_nodelay(self.tcp_nodelay);

        if let Some(timeout) = self.request_timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(idle_timeout) = self.pool_idle_timeout {
            client_builder = client_builder.pool_idle_timeout(idle_timeout);
        }

        client_builder.build().map_err(TransportError::Network)
    }

    /// Full URL of the generation endpoint
    ///
    /// The endpoint path is appended rather than joined so a path prefix on
    /// the service URL (e.g. behind a reverse proxy) is preserved.
    pub fn endpoint_url(&self) -> TransportResult<Url> {
        let raw = format!(
            "{}/{}",
            self.service_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: raw.clone(),
            error: e.to_string(),
        })
    }
}
