//! Message API: buyer/seller conversations.

use super::ApiRequest;
use serde_json::Value;

const BASE: &str = "/commerce/message/v1";

pub fn get_conversations(
    filter: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("conversation")
        .query_opt("filter", filter)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_conversation(conversation_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("conversation")
        .segment(conversation_id)
}

pub fn send_message(message: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("send_message").body(message)
}

pub fn update_conversation(update: Value) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("update_conversation")
        .body(update)
}

pub fn bulk_update_conversation(update: Value) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("bulk_update_conversation")
        .body(update)
}
