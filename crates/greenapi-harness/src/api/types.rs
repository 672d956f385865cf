//! API types
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Gateway request trait
pub trait GatewayRequest {
    type Args;

    /// Method segment of the endpoint path, e.g. `sendMessage`
    const METHOD: &'static str;
    fn new(args: Self::Args) -> Self;
    fn chat_id(&self) -> &ChatId;
}
/// Chat id struct, e.g. `77083674713@c.us`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Hash, Eq)]
pub struct ChatId(pub String);

impl From<&str> for ChatId {
    fn from(value: &str) -> Self {
        ChatId(value.to_string())
    }
}

impl From<String> for ChatId {
    fn from(value: String) -> Self {
        ChatId(value)
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
/// Result of a single gateway call.
///
/// The response body is drained before the outcome is built, so the underlying
/// connection is already released when the caller sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum CallOutcome {
    /// The gateway answered with an HTTP status
    Http { status: StatusCode, body: String },
    /// The request never produced a response (connect, DNS, TLS, ...)
    Transport { message: String },
}

impl CallOutcome {
    /// Observed status code. Transport failures report `500`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallOutcome::Http { status, .. } => *status,
            CallOutcome::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body, if a response was received
    pub fn body(&self) -> Option<&str> {
        match self {
            CallOutcome::Http { body, .. } => Some(body),
            CallOutcome::Transport { .. } => None,
        }
    }

    /// Error text of a transport failure
    pub fn error_text(&self) -> Option<&str> {
        match self {
            CallOutcome::Http { .. } => None,
            CallOutcome::Transport { message } => Some(message),
        }
    }
}
