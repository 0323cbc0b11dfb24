//! Feedback API.

use super::ApiRequest;
use serde_json::{json, Value};

const BASE: &str = "/commerce/feedback/v1";

pub fn get_awaiting_feedback(
    filter: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("awaiting_feedback")
        .query_opt("filter", filter)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_feedback(transaction_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("feedback")
        .query("transaction_id", transaction_id)
}

pub fn get_feedback_rating_summary() -> ApiRequest {
    ApiRequest::get(BASE).segment("feedback_rating_summary")
}

pub fn leave_feedback_for_buyer(feedback: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("feedback").body(feedback)
}

pub fn respond_to_feedback(feedback_id: &str, response_text: &str) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("respond_to_feedback")
        .body(json!({
            "feedbackId": feedback_id,
            "responseText": response_text,
            "responseType": "REPLY",
        }))
}
