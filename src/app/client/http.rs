//! Core HTTP operations against the generation service
//!
//! Exactly one request is sent per call. There is no retry or backoff: a
//! failed generation is reported to the user, who decides whether to submit
//! again.

use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::app::client::response::ErrorBody;
use crate::errors::{TransportError, TransportResult};

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new HttpHandler around the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// POSTs `body` as JSON and returns the raw response body on success
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Network` if no response was received (or its
    /// body could not be read), and `TransportError::Status` carrying the
    /// decoded error payload for any non-2xx status.
    pub async fn post_json<T>(&self, url: &Url, body: &T) -> TransportResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let response = self.client.post(url.as_str()).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body is treated like a missing one
            let body = match response.bytes().await {
                Ok(bytes) => ErrorBody::from_bytes(&bytes),
                Err(e) => {
                    tracing::debug!("Could not read error body from {}: {}", url, e);
                    ErrorBody::Absent
                }
            };
            tracing::warn!("Generation service returned HTTP {} for {}", status, url);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Get a reference to the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
