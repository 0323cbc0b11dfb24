use crate::api::ApiRequest;
use crate::constants::network::USER_AGENT;
use crate::errors::ToolError;
use crate::services::config::EbayConfig;
use crate::services::logger::Logger;
use crate::services::token_manager::TokenManager;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

pub fn build_http_client(config: &EbayConfig) -> Result<Client, ToolError> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| ToolError::internal(format!("Failed to build HTTP client: {}", err)))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ToolError {
    if err.is_timeout() {
        return ToolError::timeout("eBay request timed out");
    }
    ToolError::transport(err.to_string())
}

/// Authenticated single-attempt dispatcher for eBay REST calls.
pub struct EbayApiClient {
    logger: Logger,
    config: Arc<EbayConfig>,
    client: Client,
    tokens: Arc<TokenManager>,
}

impl EbayApiClient {
    pub fn new(
        logger: Logger,
        config: Arc<EbayConfig>,
        client: Client,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            logger: logger.child("http"),
            config,
            client,
            tokens,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    pub async fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ToolError> {
        let mut request = ApiRequest::new(method, path);
        for (key, value) in query {
            request = request.query(key, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        self.execute(request).await
    }

    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ToolError> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|err| {
            ToolError::internal(format!("Invalid API base URL: {}", err))
        })?;
        url.path_segments_mut()
            .map_err(|_| ToolError::internal("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(request.segments.iter());
        Ok(url)
    }

    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ToolError> {
        let url = self.url_for(&request)?;
        let token = self.tokens.get_token().await?;

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ToolError::invalid_params(format!("Invalid header name: {}", name)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                ToolError::invalid_params(format!("Invalid value for header {}", name))
            })?;
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|err| {
            let mapped = map_reqwest_error(err);
            self.logger.warn(
                "eBay request failed",
                Some(&serde_json::json!({
                    "method": request.method.as_str(),
                    "path": request.path(),
                    "error": mapped.message,
                })),
            );
            mapped
        })?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        self.logger.debug(
            "eBay request completed",
            Some(&serde_json::json!({
                "method": request.method.as_str(),
                "path": request.path(),
                "status": status.as_u16(),
                "duration_ms": started.elapsed().as_millis() as u64,
            })),
        );

        if status.is_success() {
            return Ok(parse_body(&text));
        }
        Err(self.normalize_failure(status, &text).await)
    }

    async fn normalize_failure(&self, status: StatusCode, text: &str) -> ToolError {
        let parsed: Option<Value> = serde_json::from_str(text).ok();
        let reason = parsed
            .as_ref()
            .and_then(parse_ebay_error)
            .unwrap_or_else(|| {
                format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
                .trim_end()
                .to_string()
            });
        let message = format!("eBay API Error: {}", reason);
        let errors = parsed
            .as_ref()
            .and_then(|v| v.get("errors"))
            .cloned()
            .unwrap_or(Value::Null);

        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear().await;
            return ToolError::authentication(message)
                .with_details(serde_json::json!({ "status": 401, "errors": errors }));
        }
        let err = ToolError::upstream(status.as_u16(), message);
        if errors.is_null() {
            err
        } else {
            err.with_details(serde_json::json!({ "status": status.as_u16(), "errors": errors }))
        }
    }
}

/// Empty bodies become `null`; bodies that are not JSON are returned as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub(crate) fn parse_ebay_error(body: &Value) -> Option<String> {
    let first = body
        .get("errors")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first());
    let from_errors = first.and_then(|err| {
        ["longMessage", "message"]
            .iter()
            .find_map(|key| err.get(*key).and_then(|v| v.as_str()))
    });
    from_errors
        .or_else(|| body.get("error_description").and_then(|v| v.as_str()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::EbayEnvironment;
    use serde_json::json;

    #[test]
    fn error_message_prefers_long_message() {
        let body = json!({"errors": [{"errorId": 25001, "message": "short", "longMessage": "the long one"}]});
        assert_eq!(parse_ebay_error(&body).as_deref(), Some("the long one"));

        let body = json!({"errors": [{"message": "only short"}]});
        assert_eq!(parse_ebay_error(&body).as_deref(), Some("only short"));

        let body = json!({"error": "invalid_token", "error_description": "token expired"});
        assert_eq!(parse_ebay_error(&body).as_deref(), Some("token expired"));

        assert_eq!(parse_ebay_error(&json!({"errors": []})), None);
    }

    #[test]
    fn bodies_map_to_json_values() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body(r#"{"total":0}"#), json!({"total": 0}));
        assert_eq!(parse_body("OK"), json!("OK"));
    }

    #[test]
    fn url_encodes_dynamic_segments() {
        let config = Arc::new(
            EbayConfig::new("id", "secret", EbayEnvironment::Sandbox)
                .with_api_base_url("http://127.0.0.1:9999"),
        );
        let client = Client::new();
        let logger = Logger::new("test");
        let tokens = Arc::new(TokenManager::new(logger.clone(), config.clone(), client.clone()));
        let api = EbayApiClient::new(logger, config, client, tokens);

        let request = ApiRequest::get("/sell/inventory/v1/inventory_item").segment("red shirt/xl");
        let url = api.url_for(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9999/sell/inventory/v1/inventory_item/red%20shirt%2Fxl"
        );
    }
}
