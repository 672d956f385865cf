//! Network module
use crate::api::types::CallOutcome;
use crate::error::Result;
use reqwest::{Client, ClientBuilder, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, error, trace, warn};

/// Shared HTTP client for gateway calls.
///
/// Requests go out one at a time with the transport's default timeouts and no retries.
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    client: Client,
}

impl ConnectionPool {
    /// Create a pool around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a pool with a rustls-backed client
    ///
    /// ## Errors
    /// - `HarnessError::Network` - TLS backend could not be initialised
    pub fn rustls() -> Result<Self> {
        let client = ClientBuilder::new().use_rustls_tls().build()?;
        Ok(Self::new(client))
    }

    /// POST `payload` as JSON to `url` and drain the response.
    ///
    /// Only encoding the payload can fail; transport failures come back as
    /// [`CallOutcome::Transport`].
    ///
    /// ## Errors
    /// - `HarnessError::Serialization` - payload could not be encoded
    #[tracing::instrument(skip(self, url, payload))]
    pub async fn post_json<B>(&self, url: &str, payload: &B) -> Result<CallOutcome>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;
        trace!("Request body length: {} bytes", body.len());

        let response = match self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!("Transport error: {}", err);
                return Ok(CallOutcome::Transport {
                    message: err.to_string(),
                });
            }
        };

        let status = response.status();
        log_status(&status);

        // Consuming the response releases the connection back to the client
        let body = response.text().await.unwrap_or_else(|err| {
            warn!("Failed to read response body: {}", err);
            String::new()
        });
        trace!("Response body length: {} bytes", body.len());

        Ok(CallOutcome::Http { status, body })
    }
}

fn log_status(status: &StatusCode) {
    if status.is_success() {
        debug!("Response status: {}", status);
    } else if *status == StatusCode::TOO_MANY_REQUESTS {
        warn!("Rate limited: {}", status);
    } else if status.is_server_error() {
        warn!("Server error: {}", status);
    } else {
        debug!("Response status: {}", status);
    }
}
