//! Notification API: destinations, subscriptions, filters and topics.

use super::ApiRequest;
use serde_json::Value;

const BASE: &str = "/commerce/notification/v1";

fn subscription(method: fn(&str) -> ApiRequest, subscription_id: &str) -> ApiRequest {
    method(BASE).segment("subscription").segment(subscription_id)
}

fn destination(method: fn(&str) -> ApiRequest, destination_id: &str) -> ApiRequest {
    method(BASE).segment("destination").segment(destination_id)
}

pub fn get_public_key(public_key_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("public_key")
        .segment(public_key_id)
}

pub fn get_config() -> ApiRequest {
    ApiRequest::get(BASE).segment("config")
}

pub fn update_config(config: Value) -> ApiRequest {
    ApiRequest::put(BASE).segment("config").body(config)
}

pub fn get_destinations(limit: Option<u64>, continuation_token: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("destination")
        .query_opt("limit", limit)
        .query_opt("continuation_token", continuation_token)
}

pub fn get_destination(destination_id: &str) -> ApiRequest {
    destination(ApiRequest::get, destination_id)
}

pub fn create_destination(body: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("destination").body(body)
}

pub fn update_destination(destination_id: &str, body: Value) -> ApiRequest {
    destination(ApiRequest::put, destination_id).body(body)
}

pub fn delete_destination(destination_id: &str) -> ApiRequest {
    destination(ApiRequest::delete, destination_id)
}

pub fn get_subscriptions(limit: Option<u64>, continuation_token: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("subscription")
        .query_opt("limit", limit)
        .query_opt("continuation_token", continuation_token)
}

pub fn get_subscription(subscription_id: &str) -> ApiRequest {
    subscription(ApiRequest::get, subscription_id)
}

pub fn create_subscription(body: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("subscription").body(body)
}

pub fn update_subscription(subscription_id: &str, body: Value) -> ApiRequest {
    subscription(ApiRequest::put, subscription_id).body(body)
}

pub fn delete_subscription(subscription_id: &str) -> ApiRequest {
    subscription(ApiRequest::delete, subscription_id)
}

pub fn enable_subscription(subscription_id: &str) -> ApiRequest {
    subscription(ApiRequest::post, subscription_id).segment("enable")
}

pub fn disable_subscription(subscription_id: &str) -> ApiRequest {
    subscription(ApiRequest::post, subscription_id).segment("disable")
}

/// Asks eBay to push a test payload to the subscription's destination.
pub fn test_subscription(subscription_id: &str) -> ApiRequest {
    subscription(ApiRequest::post, subscription_id).segment("test")
}

pub fn create_subscription_filter(subscription_id: &str, filter: Value) -> ApiRequest {
    subscription(ApiRequest::post, subscription_id)
        .segment("filter")
        .body(filter)
}

pub fn get_subscription_filter(subscription_id: &str, filter_id: &str) -> ApiRequest {
    subscription(ApiRequest::get, subscription_id)
        .segment("filter")
        .segment(filter_id)
}

pub fn delete_subscription_filter(subscription_id: &str, filter_id: &str) -> ApiRequest {
    subscription(ApiRequest::delete, subscription_id)
        .segment("filter")
        .segment(filter_id)
}

pub fn get_topic(topic_id: &str) -> ApiRequest {
    ApiRequest::get(BASE).segment("topic").segment(topic_id)
}

pub fn get_topics(limit: Option<u64>, continuation_token: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("topic")
        .query_opt("limit", limit)
        .query_opt("continuation_token", continuation_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn subscription_actions() {
        assert_eq!(
            enable_subscription("s1").path(),
            "/commerce/notification/v1/subscription/s1/enable"
        );
        assert_eq!(disable_subscription("s1").method, Method::POST);
        assert_eq!(delete_subscription("s1").method, Method::DELETE);
        assert_eq!(
            get_subscription_filter("s1", "f2").path(),
            "/commerce/notification/v1/subscription/s1/filter/f2"
        );
    }

    #[test]
    fn paging_uses_continuation_token() {
        let req = get_topics(Some(10), Some("abc"));
        assert_eq!(req.path(), "/commerce/notification/v1/topic");
        assert_eq!(req.query_value("continuation_token"), Some("abc"));
        assert!(get_destinations(None, None).query.is_empty());
    }
}
