use crate::api::{feedback, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_awaiting_feedback",
    "ebay_get_feedback",
    "ebay_get_feedback_rating_summary",
    "ebay_leave_feedback_for_buyer",
    "ebay_respond_to_feedback",
];

#[derive(Clone)]
pub struct FeedbackManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl FeedbackManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("feedback"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let request = match tool {
            "ebay_get_awaiting_feedback" => feedback::get_awaiting_feedback(
                v.optional_string(args, "filter")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_feedback" => feedback::get_feedback(&v.ensure_string(args, "transactionId")?),
            "ebay_get_feedback_rating_summary" => feedback::get_feedback_rating_summary(),
            "ebay_leave_feedback_for_buyer" => {
                feedback::leave_feedback_for_buyer(v.ensure_object(args, "feedbackData")?)
            }
            "ebay_respond_to_feedback" => feedback::respond_to_feedback(
                &v.ensure_string(args, "feedbackId")?,
                &v.ensure_string(args, "responseText")?,
            ),
            _ => return Err(unrouted_tool_error("feedback", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for FeedbackManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
