//! Get the message history of a chat, method `getChatHistory`
//! [More info](https://green-api.com/en/docs/api/journals/GetChatHistory/)
use crate::api::types::ChatId;

gateway_api_method! {
    method = "getChatHistory",
    request = RequestGetChatHistory {
        required {
            chat_id: ChatId,
            count: u32,
        },
        optional {}
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GatewayRequest;

    #[test]
    fn test_serialize_request() {
        let req = RequestGetChatHistory::new((ChatId::from("77083674713@c.us"), 1));
        let val = serde_json::to_value(&req).unwrap();
        assert_eq!(
            val,
            serde_json::json!({"chatId": "77083674713@c.us", "count": 1})
        );
    }

    #[test]
    fn test_zero_count_is_serialized() {
        let req = RequestGetChatHistory::new((ChatId::from("invalid id"), 0));
        let val = serde_json::to_value(&req).unwrap();
        assert_eq!(val["count"], 0);
    }

    #[test]
    fn test_chat_id_accessor() {
        let req = RequestGetChatHistory::new((ChatId::from("c1"), 5));
        assert_eq!(req.chat_id().0, "c1");
        assert_eq!(RequestGetChatHistory::METHOD, "getChatHistory");
    }
}
