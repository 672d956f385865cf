//! Send a text message to a chat, method `sendMessage`
//! [More info](https://green-api.com/en/docs/api/sending/SendMessage/)
use crate::api::types::ChatId;

gateway_api_method! {
    method = "sendMessage",
    request = RequestSendMessage {
        required {
            chat_id: ChatId,
            message: String,
        },
        optional {}
    },
}
