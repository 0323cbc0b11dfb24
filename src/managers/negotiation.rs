use crate::api::{negotiation, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_find_eligible_items",
    "ebay_send_offer_to_interested_buyers",
];

#[derive(Clone)]
pub struct NegotiationManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl NegotiationManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("negotiation"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let marketplace_id = v.optional_string(args, "marketplaceId")?;
        let request = match tool {
            "ebay_find_eligible_items" => negotiation::find_eligible_items(
                marketplace_id.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_send_offer_to_interested_buyers" => negotiation::send_offer_to_interested_buyers(
                marketplace_id.as_deref(),
                v.ensure_object(args, "offerData")?,
            ),
            _ => return Err(unrouted_tool_error("negotiation", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for NegotiationManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
