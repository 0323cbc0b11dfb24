use crate::constants::{auth, ebay, network};
use crate::errors::ToolError;
use serde::Serialize;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EbayEnvironment {
    Sandbox,
    Production,
}

impl EbayEnvironment {
    pub fn parse(raw: &str) -> Result<Self, ToolError> {
        match raw.trim().to_lowercase().as_str() {
            "" | "sandbox" => Ok(EbayEnvironment::Sandbox),
            "production" | "prod" => Ok(EbayEnvironment::Production),
            other => Err(ToolError::invalid_params(format!(
                "EBAY_ENVIRONMENT: expected sandbox or production, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EbayEnvironment::Sandbox => "sandbox",
            EbayEnvironment::Production => "production",
        }
    }

    pub fn api_base_url(self) -> &'static str {
        match self {
            EbayEnvironment::Sandbox => ebay::SANDBOX_API_BASE_URL,
            EbayEnvironment::Production => ebay::PRODUCTION_API_BASE_URL,
        }
    }

    pub fn auth_url(self) -> String {
        format!("{}{}", self.api_base_url(), ebay::TOKEN_PATH)
    }
}

/// Process-wide settings. Built once at startup and never mutated.
#[derive(Clone)]
pub struct EbayConfig {
    pub client_id: String,
    pub client_secret: String,
    pub environment: EbayEnvironment,
    pub api_base_url: String,
    pub auth_url: String,
    pub scope: String,
    pub status_feed_url: String,
    pub timeout_ms: u64,
    pub token_expiry_margin_secs: u64,
}

impl fmt::Debug for EbayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EbayConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("api_base_url", &self.api_base_url)
            .field("auth_url", &self.auth_url)
            .field("scope", &self.scope)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl EbayConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: EbayEnvironment,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment,
            api_base_url: environment.api_base_url().to_string(),
            auth_url: environment.auth_url(),
            scope: ebay::DEFAULT_SCOPE.to_string(),
            status_feed_url: ebay::API_STATUS_FEED_URL.to_string(),
            timeout_ms: network::TIMEOUT_API_REQUEST_MS,
            token_expiry_margin_secs: auth::TOKEN_EXPIRY_MARGIN_SECS,
        }
    }

    pub fn from_env() -> Result<Self, ToolError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (Some(client_id), Some(client_secret)) =
            (read("EBAY_CLIENT_ID"), read("EBAY_CLIENT_SECRET"))
        else {
            return Err(ToolError::invalid_params(
                "EBAY_CLIENT_ID and EBAY_CLIENT_SECRET must be set",
            )
            .with_hint("Create an application keyset at developer.ebay.com and export both values."));
        };
        let environment =
            EbayEnvironment::parse(read("EBAY_ENVIRONMENT").as_deref().unwrap_or("sandbox"))?;

        let mut config = Self::new(client_id, client_secret, environment);
        if let Some(base) = read("EBAY_API_BASE_URL") {
            config = config.with_api_base_url(normalize_base_url(&base, "EBAY_API_BASE_URL")?);
        }
        if let Some(auth_url) = read("EBAY_AUTH_URL") {
            config.auth_url = normalize_base_url(&auth_url, "EBAY_AUTH_URL")?;
        }
        if let Some(feed) = read("EBAY_API_STATUS_URL") {
            config.status_feed_url = normalize_base_url(&feed, "EBAY_API_STATUS_URL")?;
        }
        if let Some(scope) = read("EBAY_OAUTH_SCOPE") {
            config.scope = scope;
        }
        if let Some(raw) = read("EBAY_HTTP_TIMEOUT_MS") {
            config.timeout_ms = parse_positive(&raw, "EBAY_HTTP_TIMEOUT_MS")?;
        }
        if let Some(raw) = read("EBAY_TOKEN_EXPIRY_MARGIN_SECS") {
            config.token_expiry_margin_secs = raw.parse::<u64>().map_err(|_| {
                ToolError::invalid_params("EBAY_TOKEN_EXPIRY_MARGIN_SECS must be an integer")
            })?;
        }
        Ok(config)
    }

    /// Points both the REST API and the token endpoint at `base`.
    pub fn with_api_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        self.auth_url = format!("{}{}", base, ebay::TOKEN_PATH);
        self.api_base_url = base;
        self
    }

    pub fn with_status_feed_url(mut self, url: impl Into<String>) -> Self {
        self.status_feed_url = url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_token_expiry_margin_secs(mut self, secs: u64) -> Self {
        self.token_expiry_margin_secs = secs;
        self
    }
}

fn parse_positive(raw: &str, label: &str) -> Result<u64, ToolError> {
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ToolError::invalid_params(format!(
            "{} must be a positive integer",
            label
        ))),
    }
}

fn normalize_base_url(raw: &str, label: &str) -> Result<String, ToolError> {
    let url = Url::parse(raw).map_err(|_| {
        ToolError::invalid_params(format!("{} is not a valid URL", label))
            .with_details(serde_json::json!({ "value": raw }))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ToolError::invalid_params(format!(
            "{} must use http or https",
            label
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_sandbox() {
        let config = EbayConfig::from_lookup(lookup(&[
            ("EBAY_CLIENT_ID", "id"),
            ("EBAY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.environment, EbayEnvironment::Sandbox);
        assert_eq!(config.api_base_url, "https://api.sandbox.ebay.com");
        assert_eq!(
            config.auth_url,
            "https://api.sandbox.ebay.com/identity/v1/oauth2/token"
        );
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.token_expiry_margin_secs, 60);
    }

    #[test]
    fn production_selects_live_hosts() {
        let config = EbayConfig::from_lookup(lookup(&[
            ("EBAY_CLIENT_ID", "id"),
            ("EBAY_CLIENT_SECRET", "secret"),
            ("EBAY_ENVIRONMENT", "PRODUCTION"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.ebay.com");
        assert_eq!(config.auth_url, "https://api.ebay.com/identity/v1/oauth2/token");
    }

    #[test]
    fn missing_credentials_fail() {
        let err = EbayConfig::from_lookup(lookup(&[("EBAY_CLIENT_ID", "id")])).unwrap_err();
        assert!(err.message.contains("EBAY_CLIENT_SECRET"));
    }

    #[test]
    fn rejects_unknown_environment_and_bad_urls() {
        let err = EbayConfig::from_lookup(lookup(&[
            ("EBAY_CLIENT_ID", "id"),
            ("EBAY_CLIENT_SECRET", "secret"),
            ("EBAY_ENVIRONMENT", "staging"),
        ]))
        .unwrap_err();
        assert!(err.message.contains("staging"));

        let err = EbayConfig::from_lookup(lookup(&[
            ("EBAY_CLIENT_ID", "id"),
            ("EBAY_CLIENT_SECRET", "secret"),
            ("EBAY_API_BASE_URL", "ftp://example.com"),
        ]))
        .unwrap_err();
        assert!(err.message.contains("http or https"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = EbayConfig::from_lookup(lookup(&[
            ("EBAY_CLIENT_ID", "id"),
            ("EBAY_CLIENT_SECRET", "secret"),
            ("EBAY_API_BASE_URL", "http://127.0.0.1:9000/"),
            ("EBAY_HTTP_TIMEOUT_MS", "5000"),
            ("EBAY_TOKEN_EXPIRY_MARGIN_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(
            config.auth_url,
            "http://127.0.0.1:9000/identity/v1/oauth2/token"
        );
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.token_expiry_margin_secs, 0);
    }

    #[test]
    fn debug_hides_secret() {
        let config = EbayConfig::new("id", "super-secret", EbayEnvironment::Sandbox);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
    }
}
