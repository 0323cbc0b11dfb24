use crate::api::{account, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_custom_policies",
    "ebay_get_custom_policy",
    "ebay_get_fulfillment_policies",
    "ebay_get_payment_policies",
    "ebay_get_return_policies",
    "ebay_get_privileges",
];

#[derive(Clone)]
pub struct AccountManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl AccountManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("account"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let marketplace_id = || v.optional_string(args, "marketplaceId");
        let request = match tool {
            "ebay_get_custom_policies" => {
                account::get_custom_policies(v.optional_string(args, "policyTypes")?.as_deref())
            }
            "ebay_get_custom_policy" => {
                account::get_custom_policy(&v.ensure_string(args, "customPolicyId")?)
            }
            "ebay_get_fulfillment_policies" => {
                account::get_fulfillment_policies(marketplace_id()?.as_deref())
            }
            "ebay_get_payment_policies" => {
                account::get_payment_policies(marketplace_id()?.as_deref())
            }
            "ebay_get_return_policies" => account::get_return_policies(marketplace_id()?.as_deref()),
            "ebay_get_privileges" => account::get_privileges(),
            _ => return Err(unrouted_tool_error("account", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for AccountManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
