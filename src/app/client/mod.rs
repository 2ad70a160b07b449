//! HTTP client for the README generation service
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: Core HTTP operations (single POST, no retries)
//! - `response`: Interpretation of success and error bodies
//!
//! The form only depends on the [`GenerationService`] trait, so tests and
//! alternative transports can stand in for [`ReadmeClient`].

use async_trait::async_trait;
use url::Url;

use crate::app::models::ReadmeRequest;
use crate::errors::TransportResult;

// Module declarations
pub mod config;
pub mod http;
pub mod response;

pub use config::ClientConfig;
pub use response::{extract_readme, ErrorBody};

use http::HttpHandler;

/// Something that can turn a generation request into README text
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Issue exactly one generation call and return the README text
    async fn generate(&self, request: &ReadmeRequest) -> TransportResult<String>;
}

/// HTTP client for the generation endpoint
#[derive(Debug, Clone)]
pub struct ReadmeClient {
    http_handler: HttpHandler,
    endpoint: Url,
}

impl ReadmeClient {
    /// Creates a client for the default local service
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if HTTP client creation fails
    pub fn new() -> TransportResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the endpoint URL is invalid or the HTTP
    /// client cannot be built
    pub fn with_config(config: ClientConfig) -> TransportResult<Self> {
        let endpoint = config.endpoint_url()?;
        let client = config.build_http_client()?;

        tracing::info!("Created generation client for {}", endpoint);

        Ok(Self {
            http_handler: HttpHandler::new(client),
            endpoint,
        })
    }

    /// The generation endpoint this client posts to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationService for ReadmeClient {
    async fn generate(&self, request: &ReadmeRequest) -> TransportResult<String> {
        tracing::info!("Requesting README for {}", request.git_url);
        let body = self.http_handler.post_json(&self.endpoint, request).await?;
        let readme = extract_readme(&body);
        tracing::info!("Received README ({} chars)", readme.chars().count());
        Ok(readme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReadmeClient::new().unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:8080/api/readme/generate"
        );
    }

    #[test]
    fn test_client_creation_with_invalid_url() {
        let config = ClientConfig {
            service_url: "::::".to_string(),
            ..Default::default()
        };
        assert!(ReadmeClient::with_config(config).is_err());
    }
}
