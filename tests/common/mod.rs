#![allow(dead_code)]

use ebay_mcp::app::App;
use ebay_mcp::services::config::{EbayConfig, EbayEnvironment};
use httpmock::prelude::*;
use httpmock::Mock;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::Mutex;

pub static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub const TOKEN_PATH: &str = "/identity/v1/oauth2/token";
pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
/// `Basic base64("test-client:test-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";
pub const ACCESS_TOKEN: &str = "v^1.1#i^1#test-token";

pub fn config_for(server: &MockServer) -> EbayConfig {
    EbayConfig::new(CLIENT_ID, CLIENT_SECRET, EbayEnvironment::Sandbox)
        .with_api_base_url(server.base_url())
        .with_status_feed_url(server.url("/status/rss"))
        .with_timeout_ms(5_000)
}

pub fn app_for(server: &MockServer) -> Arc<App> {
    Arc::new(App::with_config(config_for(server)).expect("app wiring"))
}

pub fn mock_token<'a>(server: &'a MockServer, expires_in: u64) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(TOKEN_PATH)
            .header("authorization", BASIC_AUTH)
            .body_includes("grant_type=client_credentials");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "access_token": ACCESS_TOKEN,
                "expires_in": expires_in,
                "token_type": "Application Access Token",
            }));
    })
}

pub fn bearer() -> String {
    format!("Bearer {}", ACCESS_TOKEN)
}

pub fn restore_env(key: &str, previous: Option<String>) {
    match previous {
        Some(value) => std::env::set_var(key, value),
        None => std::env::remove_var(key),
    }
}
