use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::ToolError;
use crate::mcp::aliases::canonical_tool_name;
use crate::mcp::catalog::validate_tool_args;
use crate::services::logger::Logger;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unknown_tool_error;

use serde_json::Value;

/// One implementation per resource group; `tool` is always the canonical name.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError>;
}

#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    validation: Validation,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(
        logger: Logger,
        validation: Validation,
        handlers: HashMap<String, Arc<dyn ToolHandler>>,
    ) -> Self {
        Self {
            logger: logger.child("executor"),
            validation,
            handlers: Arc::new(handlers),
        }
    }

    pub fn has_handler(&self, tool: &str) -> bool {
        self.handlers.contains_key(tool)
    }

    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolves aliases; unknown names fail here, before any handler or network work.
    pub fn resolve(&self, tool: &str) -> Result<String, ToolError> {
        let trimmed = tool.trim();
        if self.handlers.contains_key(trimmed) {
            return Ok(trimmed.to_string());
        }
        let canonical = canonical_tool_name(trimmed);
        if self.handlers.contains_key(canonical.as_ref()) {
            return Ok(canonical.into_owned());
        }
        Err(unknown_tool_error(trimmed, &self.tool_names()))
    }

    pub async fn execute(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let canonical = self.resolve(tool)?;
        let args = self.validation.normalize_args(args)?;
        validate_tool_args(&canonical, &args)?;
        let handler = self
            .handlers
            .get(&canonical)
            .cloned()
            .ok_or_else(|| unknown_tool_error(&canonical, &self.tool_names()))?;

        let call_id = uuid::Uuid::new_v4().to_string();
        let invoked_as = (canonical != tool).then(|| tool.to_string());
        self.logger.debug(
            "tool call",
            Some(&serde_json::json!({
                "call_id": call_id,
                "tool": canonical,
                "invoked_as": invoked_as,
                "args": args,
            })),
        );

        let started = Instant::now();
        let result = handler.handle(&canonical, args).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => self.logger.info(
                "tool call succeeded",
                Some(&serde_json::json!({
                    "call_id": call_id,
                    "tool": canonical,
                    "duration_ms": duration_ms,
                })),
            ),
            Err(err) => self.logger.warn(
                "tool call failed",
                Some(&serde_json::json!({
                    "call_id": call_id,
                    "tool": canonical,
                    "duration_ms": duration_ms,
                    "kind": err.kind,
                    "code": err.code,
                    "error": err.message,
                })),
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolErrorKind;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
            Ok(json!({ "tool": tool, "args": args }))
        }
    }

    fn executor() -> ToolExecutor {
        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        handlers.insert("ebay_get_orders".to_string(), Arc::new(Echo));
        ToolExecutor::new(Logger::new("test"), Validation::new(), handlers)
    }

    #[tokio::test]
    async fn alias_reaches_the_canonical_handler() {
        let out = executor().execute("get_orders", json!({"limit": 5})).await.unwrap();
        assert_eq!(out["tool"], "ebay_get_orders");
        assert_eq!(out["args"]["limit"], 5);
    }

    #[tokio::test]
    async fn null_arguments_become_an_empty_object() {
        let out = executor().execute("ebay_get_orders", Value::Null).await.unwrap();
        assert_eq!(out["args"], json!({}));
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_with_suggestions() {
        let err = executor().execute("ebay_get_ordrs", json!({})).await.unwrap_err();
        assert_eq!(err.kind, ToolErrorKind::UnknownTool);
        assert!(err.hint.unwrap_or_default().contains("ebay_get_orders"));
    }

    #[tokio::test]
    async fn schema_violations_never_reach_the_handler() {
        let err = executor()
            .execute("ebay_get_orders", json!({"limit": 0}))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ToolErrorKind::InvalidParams);
    }
}
