//! Fixed test cases for the gateway suites
use crate::api::journals::RequestGetChatHistory;
use crate::api::sending::RequestSendMessage;
use crate::api::types::{ChatId, GatewayRequest};
use reqwest::StatusCode;

/// Chat id the gateway accepts
pub const VALID_CHAT_ID: &str = "77083674713@c.us";
/// Chat id the gateway rejects as malformed
pub const INVALID_CHAT_ID: &str = "invalid id";

/// Expected status and body fragments of a call
#[derive(Clone, Debug, PartialEq)]
pub struct ExpectedResult {
    pub status: StatusCode,
    /// Substrings the response body should contain, in order of declaration
    pub contains: Vec<&'static str>,
}

impl ExpectedResult {
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            contains: Vec::new(),
        }
    }

    pub fn with_contains(mut self, contains: &[&'static str]) -> Self {
        self.contains = contains.to_vec();
        self
    }
}

/// A request paired with its expected result
#[derive(Clone, Debug)]
pub struct TestCase<Rq> {
    pub name: &'static str,
    pub input: Rq,
    pub expected: ExpectedResult,
}

pub fn send_message_cases() -> Vec<TestCase<RequestSendMessage>> {
    vec![
        TestCase {
            name: "invalid chat id",
            input: RequestSendMessage::new((ChatId::from(INVALID_CHAT_ID), String::new())),
            expected: ExpectedResult::status(StatusCode::BAD_REQUEST)
                .with_contains(&["Validation failed", "'chatId'"]),
        },
        TestCase {
            name: "empty message",
            input: RequestSendMessage::new((ChatId::from(VALID_CHAT_ID), String::new())),
            expected: ExpectedResult::status(StatusCode::BAD_REQUEST)
                .with_contains(&["Validation failed", "'message'"]),
        },
        TestCase {
            name: "text message",
            input: RequestSendMessage::new((
                ChatId::from(VALID_CHAT_ID),
                "workin??".to_string(),
            )),
            expected: ExpectedResult::status(StatusCode::OK),
        },
    ]
}

pub fn get_chat_history_cases() -> Vec<TestCase<RequestGetChatHistory>> {
    vec![
        TestCase {
            name: "invalid chat id",
            input: RequestGetChatHistory::new((ChatId::from(INVALID_CHAT_ID), 0)),
            expected: ExpectedResult::status(StatusCode::BAD_REQUEST)
                .with_contains(&["Validation failed", "'chatId'"]),
        },
        TestCase {
            name: "last message",
            input: RequestGetChatHistory::new((ChatId::from(VALID_CHAT_ID), 1)),
            expected: ExpectedResult::status(StatusCode::OK),
        },
    ]
}
