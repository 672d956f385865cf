pub mod net;

use crate::api::journals::RequestGetChatHistory;
use crate::api::sending::RequestSendMessage;
use crate::api::types::*;
use crate::config::GatewayConfig;
use crate::error::Result;
use net::ConnectionPool;
use serde::Serialize;
use tracing::debug;

/// Build the endpoint URL for a gateway method:
/// `{apiUrl}/waInstance{idInstance}/{method}/{apiTokenInstance}`
///
/// Values are concatenated as-is.
pub fn build_url(method: &str, config: &GatewayConfig) -> String {
    format!(
        "{}/waInstance{}/{}/{}",
        config.api_url, config.id_instance, method, config.api_token_instance
    )
}

#[derive(Debug, Clone)]
/// Gateway client
/// - `config`: [`GatewayConfig`] - instance credentials, fixed for the client's lifetime
/// - `connection_pool`: [`ConnectionPool`] - HTTP client used for every call
pub struct Gateway {
    config: GatewayConfig,
    connection_pool: ConnectionPool,
}

impl Gateway {
    /// Creates a new `Gateway` with a rustls-backed connection pool
    ///
    /// ## Errors
    /// - `HarnessError::Network` - HTTP client creation error
    pub fn new(config: GatewayConfig) -> Result<Self> {
        Ok(Self::with_connection_pool(config, ConnectionPool::rustls()?))
    }

    /// Creates a new `Gateway` with a custom connection pool
    pub fn with_connection_pool(config: GatewayConfig, connection_pool: ConnectionPool) -> Self {
        debug!("Creating gateway client for instance {}", config.id_instance);
        Self {
            config,
            connection_pool,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Endpoint URL for `method` on this instance
    pub fn url_for(&self, method: &str) -> String {
        build_url(method, &self.config)
    }

    /// Send request, get outcome
    ///
    /// Serializes `request` with [`serde_json`] and POSTs it to the endpoint of
    /// [`GatewayRequest::METHOD`].
    ///
    /// ## Errors
    /// - `HarnessError::Serialization` - request serialization error
    #[tracing::instrument(skip(self, request), fields(method = Rq::METHOD))]
    pub async fn send_api_request<Rq>(&self, request: &Rq) -> Result<CallOutcome>
    where
        Rq: GatewayRequest + Serialize + std::fmt::Debug,
    {
        debug!("Sending {} for chat {}", Rq::METHOD, request.chat_id());
        let url = self.url_for(Rq::METHOD);
        self.connection_pool.post_json(&url, request).await
    }

    /// Send a text message, method `sendMessage`
    pub async fn send_message(&self, chat_id: &str, message: &str) -> Result<CallOutcome> {
        let request = RequestSendMessage::new((ChatId::from(chat_id), message.to_string()));
        self.send_api_request(&request).await
    }

    /// Fetch the last `count` messages of a chat, method `getChatHistory`
    pub async fn get_chat_history(&self, chat_id: &str, count: u32) -> Result<CallOutcome> {
        let request = RequestGetChatHistory::new((ChatId::from(chat_id), count));
        self.send_api_request(&request).await
    }
}
