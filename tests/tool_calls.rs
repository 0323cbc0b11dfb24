use ebay_mcp::errors::ToolErrorKind;
use httpmock::prelude::*;
use serde_json::json;

mod common;
use common::{app_for, bearer, config_for, mock_token};
use ebay_mcp::app::App;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn get_orders_alias_sends_one_authenticated_request() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    let upstream = json!({
        "href": "https://api.ebay.com/sell/fulfillment/v1/order?limit=5&offset=0",
        "total": 1,
        "orders": [{"orderId": "12-34567-89012", "orderFulfillmentStatus": "NOT_STARTED"}],
    });
    let orders_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sell/fulfillment/v1/order")
            .header("authorization", bearer())
            .header("accept", "application/json")
            .query_param("limit", "5")
            .query_param_missing("offset")
            .query_param_missing("filter");
        then.status(200).json_body(upstream.clone());
    });
    let app = app_for(&server);

    let result = app
        .tool_executor
        .execute("get_orders", json!({"limit": 5}))
        .await
        .unwrap();

    assert_eq!(result, upstream);
    token_mock.assert_calls(1);
    orders_mock.assert_calls(1);
}

#[tokio::test]
async fn token_is_reused_across_tool_calls() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    server.mock(|when, then| {
        when.method(GET).path("/sell/account/v1/privilege");
        then.status(200).json_body(json!({"sellingLimit": {"quantity": 10}}));
    });
    let app = app_for(&server);

    for _ in 0..3 {
        app.tool_executor
            .execute("ebay_get_privileges", json!({}))
            .await
            .unwrap();
    }
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn absent_optional_arguments_are_not_sent() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    let policies_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sell/account/v1/fulfillment_policy")
            .query_param_missing("marketplace_id");
        then.status(200).json_body(json!({"total": 0, "fulfillmentPolicies": []}));
    });
    let app = app_for(&server);

    app.tool_executor
        .execute("ebay_get_fulfillment_policies", json!({}))
        .await
        .unwrap();
    policies_mock.assert_calls(1);
}

#[tokio::test]
async fn upstream_401_is_an_authentication_failure_and_drops_the_token() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    server.mock(|when, then| {
        when.method(GET).path("/sell/fulfillment/v1/order/12-34567-89012");
        then.status(401).json_body(json!({
            "errors": [{
                "errorId": 1001,
                "domain": "OAuth",
                "category": "REQUEST",
                "message": "Invalid access token",
                "longMessage": "Invalid access token. Check the value of the Authorization HTTP request header."
            }]
        }));
    });
    let app = app_for(&server);
    let args = json!({"orderId": "12-34567-89012"});

    let err = app
        .tool_executor
        .execute("ebay_get_order", args.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::Authentication);
    assert_eq!(
        err.message,
        "eBay API Error: Invalid access token. Check the value of the Authorization HTTP request header."
    );
    assert!(!app.tokens.is_authenticated().await);

    app.tool_executor
        .execute("ebay_get_order", args)
        .await
        .unwrap_err();
    token_mock.assert_calls(2);
}

#[tokio::test]
async fn upstream_errors_carry_status_and_message() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    server.mock(|when, then| {
        when.method(GET).path("/sell/inventory/v1/inventory_item/SKU-1");
        then.status(404).json_body(json!({
            "errors": [{"errorId": 25702, "message": "SKU SKU-1 is not available in the system"}]
        }));
    });
    let app = app_for(&server);

    let err = app
        .tool_executor
        .execute("ebay_get_inventory_item", json!({"sku": "SKU-1"}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::Upstream);
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.message,
        "eBay API Error: SKU SKU-1 is not available in the system"
    );
    assert!(app.tokens.is_authenticated().await);
}

#[tokio::test]
async fn error_without_body_falls_back_to_http_status() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    server.mock(|when, then| {
        when.method(GET).path("/commerce/feedback/v1/feedback_rating_summary");
        then.status(503);
    });
    let app = app_for(&server);

    let err = app
        .tool_executor
        .execute("ebay_get_feedback_rating_summary", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.message, "eBay API Error: HTTP 503 Service Unavailable");
    assert!(err.retryable);
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/sell/inventory/v1/inventory_item/SKU-1");
        then.status(204);
    });
    let app = app_for(&server);

    let result = app
        .tool_executor
        .execute("ebay_delete_inventory_item", json!({"sku": "SKU-1"}))
        .await
        .unwrap();
    assert!(result.is_null());
    delete_mock.assert_calls(1);
}

#[tokio::test]
async fn request_bodies_are_forwarded_unchanged() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    let offer = json!({
        "sku": "SKU-1",
        "marketplaceId": "EBAY_US",
        "format": "FIXED_PRICE",
        "pricingSummary": {"price": {"value": "19.99", "currency": "USD"}},
    });
    let offer_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/sell/inventory/v1/offer")
            .header("content-type", "application/json")
            .json_body(offer.clone());
        then.status(201).json_body(json!({"offerId": "5000012345"}));
    });
    let app = app_for(&server);

    let result = app
        .tool_executor
        .execute("ebay_create_offer", json!({"offer": offer}))
        .await
        .unwrap();
    assert_eq!(result["offerId"], "5000012345");
    offer_mock.assert_calls(1);
}

#[tokio::test]
async fn unknown_tools_and_bad_arguments_never_reach_the_network() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    let app = app_for(&server);

    let err = app
        .tool_executor
        .execute("ebay_get_ordrs", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::UnknownTool);
    assert!(err.hint.unwrap_or_default().contains("ebay_get_orders"));

    let err = app
        .tool_executor
        .execute("ebay_get_order", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::InvalidParams);

    let err = app
        .tool_executor
        .execute("ebay_get_orders", json!({"limt": 5}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::InvalidParams);
    assert!(err.message.contains("limit"));

    token_mock.assert_calls(0);
}

#[tokio::test]
async fn token_status_and_clear_are_local() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    let app = app_for(&server);

    let status = app
        .tool_executor
        .execute("ebay_get_token_status", json!({}))
        .await
        .unwrap();
    assert_eq!(status["authenticated"], false);
    assert_eq!(status["environment"], "sandbox");

    app.tokens.get_token().await.unwrap();
    let cleared = app
        .tool_executor
        .execute("ebay_clear_token", json!({}))
        .await
        .unwrap();
    assert_eq!(cleared, json!({"success": true, "cleared": true}));
    assert!(!app.tokens.is_authenticated().await);
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn api_status_reads_the_public_feed() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, 7200);
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
<item><title>Fulfillment API errors</title><summary>getOrders returns 500</summary>
<api>Fulfillment API</api><site>US</site><status>Unresolved</status></item>
<item><title>Inventory API latency</title><summary>Slow publishOffer</summary>
<api>Inventory API</api><site>US</site><status>Resolved</status></item>
</channel></rss>"#;
    server.mock(|when, then| {
        when.method(GET).path("/status/rss");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(feed);
    });
    let app = app_for(&server);

    let result = app
        .tool_executor
        .execute("ebay_get_api_status", json!({"status": "Unresolved"}))
        .await
        .unwrap();
    let items = result["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["api"], "Fulfillment API");
    assert!(result.get("error").is_none());
    token_mock.assert_calls(0);
}

#[tokio::test]
async fn api_status_failures_are_reported_in_band() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/status/rss");
        then.status(503);
    });
    let app = app_for(&server);

    let result = app
        .tool_executor
        .execute("ebay_get_api_status", json!({}))
        .await
        .unwrap();
    assert_eq!(
        result,
        json!({"items": [], "error": "Feed unavailable (HTTP 503)"})
    );
}

#[tokio::test]
async fn slow_upstream_fails_with_a_timeout() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    server.mock(|when, then| {
        when.method(GET).path("/sell/account/v1/privilege");
        then.status(200)
            .delay(Duration::from_millis(1_500))
            .json_body(json!({"sellingLimit": {}}));
    });
    let app = Arc::new(App::with_config(config_for(&server).with_timeout_ms(300)).unwrap());

    let err = app
        .tool_executor
        .execute("ebay_get_privileges", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::Timeout);
    assert_eq!(err.message, "eBay request timed out");
    assert!(err.retryable);
}

#[tokio::test]
async fn call_places_query_pairs_and_forwards_bodies() {
    let server = MockServer::start();
    mock_token(&server, 7200);
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sell/account/v1/payment_policy")
            .header("authorization", bearer())
            .query_param("marketplace_id", "EBAY_GB");
        then.status(200).json_body(json!({"total": 0}));
    });
    let body = json!({"conversationIds": ["c-1", "c-2"], "conversationStatus": "READ"});
    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/commerce/message/v1/bulk_update_conversation")
            .json_body(body.clone());
        then.status(200).json_body(json!({"updated": 2}));
    });
    let app = app_for(&server);

    let listed = app
        .api
        .call(
            reqwest::Method::GET,
            "/sell/account/v1/payment_policy",
            &[("marketplace_id", "EBAY_GB")],
            None,
        )
        .await
        .unwrap();
    assert_eq!(listed, json!({"total": 0}));

    let updated = app
        .api
        .call(
            reqwest::Method::POST,
            "/commerce/message/v1/bulk_update_conversation",
            &[],
            Some(body.clone()),
        )
        .await
        .unwrap();
    assert_eq!(updated["updated"], 2);

    list_mock.assert_calls(1);
    post_mock.assert_calls(1);
}
