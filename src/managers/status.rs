use crate::errors::ToolError;
use crate::services::api_status::{ApiStatusQuery, ApiStatusService};
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &["ebay_get_api_status"];

#[derive(Clone)]
pub struct StatusManager {
    logger: Logger,
    validation: Validation,
    service: Arc<ApiStatusService>,
}

impl StatusManager {
    pub fn new(logger: Logger, validation: Validation, service: Arc<ApiStatusService>) -> Self {
        Self {
            logger: logger.child("status"),
            validation,
            service,
        }
    }

    fn parse_query(&self, args: &Value) -> Result<ApiStatusQuery, ToolError> {
        let v = &self.validation;
        Ok(ApiStatusQuery {
            limit: v.optional_u64(args, "limit", 1)?.map(|n| n as usize),
            status: v.optional_string(args, "status")?,
            api: v.optional_string(args, "api")?,
        })
    }
}

#[async_trait::async_trait]
impl ToolHandler for StatusManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        if tool != "ebay_get_api_status" {
            return Err(unrouted_tool_error("status", tool));
        }
        let query = self.parse_query(&args)?;
        let feed = self.service.fetch(&query).await;
        serde_json::to_value(feed).map_err(|err| ToolError::internal(err.to_string()))
    }
}
