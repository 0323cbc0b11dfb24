use crate::errors::ToolError;
use crate::services::config::{EbayConfig, EbayEnvironment};
use crate::services::logger::Logger;
use crate::utils::redact::redact_text;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_secs: Option<u64>,
    pub environment: EbayEnvironment,
    pub scope: String,
    pub exchanges: u64,
}

/// Client-credentials token cache.
///
/// The cache mutex is held across the credential exchange, so callers that
/// arrive during a refresh wait for it and reuse its token: one exchange per
/// expiry, however many callers.
pub struct TokenManager {
    logger: Logger,
    config: Arc<EbayConfig>,
    client: Client,
    cache: Mutex<Option<CachedToken>>,
    exchanges: AtomicU64,
}

impl TokenManager {
    pub fn new(logger: Logger, config: Arc<EbayConfig>, client: Client) -> Self {
        Self {
            logger: logger.child("oauth"),
            config,
            client,
            cache: Mutex::new(None),
            exchanges: AtomicU64::new(0),
        }
    }

    pub async fn get_token(&self) -> Result<String, ToolError> {
        let mut guard = self.cache.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.is_fresh(Instant::now()) {
                return Ok(cached.token.clone());
            }
        }
        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *guard = Some(fresh);
        Ok(token)
    }

    pub async fn is_authenticated(&self) -> bool {
        let guard = self.cache.lock().await;
        guard
            .as_ref()
            .map(|cached| cached.is_fresh(Instant::now()))
            .unwrap_or(false)
    }

    /// Drops the cached token; the next `get_token` performs a new exchange.
    pub async fn clear(&self) {
        let mut guard = self.cache.lock().await;
        if guard.take().is_some() {
            self.logger.info("cached token cleared", None);
        }
    }

    pub async fn status(&self) -> TokenStatus {
        let guard = self.cache.lock().await;
        let now = Instant::now();
        let remaining = guard
            .as_ref()
            .filter(|cached| cached.is_fresh(now))
            .map(|cached| cached.expires_at.duration_since(now).as_secs());
        TokenStatus {
            authenticated: remaining.is_some(),
            expires_in_secs: remaining,
            environment: self.config.environment,
            scope: self.config.scope.clone(),
            exchanges: self.exchanges.load(Ordering::Relaxed),
        }
    }

    pub fn exchange_count(&self) -> u64 {
        self.exchanges.load(Ordering::Relaxed)
    }

    async fn exchange(&self) -> Result<CachedToken, ToolError> {
        self.exchanges.fetch_add(1, Ordering::Relaxed);
        let started = Instant::now();
        self.logger.debug(
            "requesting application token",
            Some(&serde_json::json!({
                "environment": self.config.environment.as_str(),
                "auth_url": self.config.auth_url,
            })),
        );

        let response = self
            .client
            .post(&self.config.auth_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .header(ACCEPT, "application/json")
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.config.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|err| self.fail(err.to_string(), None))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| self.fail(err.to_string(), Some(status.as_u16())))?;
        if !status.is_success() {
            let parsed: Option<Value> = serde_json::from_str(&text).ok();
            let reason = parsed
                .as_ref()
                .and_then(parse_oauth_error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(self.fail(reason, Some(status.as_u16())));
        }

        let payload: TokenResponse = serde_json::from_str(&text)
            .map_err(|_| self.fail("token response was not valid JSON".to_string(), None))?;
        if payload.access_token.trim().is_empty() {
            return Err(self.fail(
                "token response did not include access_token".to_string(),
                None,
            ));
        }

        let ttl = payload
            .expires_in
            .saturating_sub(self.config.token_expiry_margin_secs);
        self.logger.info(
            "application token refreshed",
            Some(&serde_json::json!({
                "expires_in": payload.expires_in,
                "cached_for_secs": ttl,
                "duration_ms": started.elapsed().as_millis() as u64,
            })),
        );
        Ok(CachedToken {
            token: payload.access_token,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        })
    }

    fn fail(&self, reason: String, status: Option<u16>) -> ToolError {
        let reason = redact_text(&reason, 1024, Some(&[self.config.client_secret.clone()]));
        self.logger.warn(
            "credential exchange failed",
            Some(&serde_json::json!({ "status": status, "reason": reason })),
        );
        let err = ToolError::authentication(format!("eBay authentication failed: {}", reason));
        match status {
            Some(code) => err.with_details(serde_json::json!({ "status": code })),
            None => err,
        }
    }
}

fn parse_oauth_error(value: &Value) -> Option<String> {
    ["error_description", "error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
