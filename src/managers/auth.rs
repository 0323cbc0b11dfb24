use crate::errors::ToolError;
use crate::services::logger::Logger;
use crate::services::token_manager::TokenManager;
use crate::services::tool_executor::ToolHandler;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &["ebay_get_token_status", "ebay_clear_token"];

/// Local tools over the cached application token. Never calls eBay.
#[derive(Clone)]
pub struct AuthManager {
    logger: Logger,
    tokens: Arc<TokenManager>,
}

impl AuthManager {
    pub fn new(logger: Logger, tokens: Arc<TokenManager>) -> Self {
        Self {
            logger: logger.child("auth"),
            tokens,
        }
    }

    async fn token_status(&self) -> Result<Value, ToolError> {
        let status = self.tokens.status().await;
        serde_json::to_value(status).map_err(|err| ToolError::internal(err.to_string()))
    }

    async fn clear_token(&self) -> Result<Value, ToolError> {
        let was_authenticated = self.tokens.is_authenticated().await;
        self.tokens.clear().await;
        Ok(serde_json::json!({
            "success": true,
            "cleared": was_authenticated,
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for AuthManager {
    async fn handle(&self, tool: &str, _args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        match tool {
            "ebay_get_token_status" => self.token_status().await,
            "ebay_clear_token" => self.clear_token().await,
            _ => Err(unrouted_tool_error("auth", tool)),
        }
    }
}
