use crate::api::{fulfillment, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_orders",
    "ebay_get_order",
    "ebay_get_shipping_fulfillments",
    "ebay_create_shipping_fulfillment",
];

#[derive(Clone)]
pub struct FulfillmentManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl FulfillmentManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("fulfillment"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let request = match tool {
            "ebay_get_orders" => fulfillment::get_orders(
                v.optional_string(args, "filter")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_order" => fulfillment::get_order(&v.ensure_string(args, "orderId")?),
            "ebay_get_shipping_fulfillments" => {
                fulfillment::get_shipping_fulfillments(&v.ensure_string(args, "orderId")?)
            }
            "ebay_create_shipping_fulfillment" => fulfillment::create_shipping_fulfillment(
                &v.ensure_string(args, "orderId")?,
                v.ensure_object(args, "fulfillment")?,
            ),
            _ => return Err(unrouted_tool_error("fulfillment", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for FulfillmentManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
