use crate::api::{message, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_conversations",
    "ebay_get_conversation",
    "ebay_send_message",
    "ebay_update_conversation",
    "ebay_bulk_update_conversation",
];

#[derive(Clone)]
pub struct MessageManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl MessageManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("message"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let request = match tool {
            "ebay_get_conversations" => message::get_conversations(
                v.optional_string(args, "filter")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_conversation" => {
                message::get_conversation(&v.ensure_string(args, "conversationId")?)
            }
            "ebay_send_message" => message::send_message(v.ensure_object(args, "messageData")?),
            "ebay_update_conversation" => {
                message::update_conversation(v.ensure_object(args, "updateData")?)
            }
            "ebay_bulk_update_conversation" => {
                message::bulk_update_conversation(v.ensure_object(args, "updateData")?)
            }
            _ => return Err(unrouted_tool_error("message", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for MessageManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
