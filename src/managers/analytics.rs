use crate::api::{analytics, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_traffic_report",
    "ebay_find_seller_standards_profiles",
    "ebay_get_seller_standards_profile",
    "ebay_get_customer_service_metric",
];

#[derive(Clone)]
pub struct AnalyticsManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl AnalyticsManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("analytics"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let request = match tool {
            "ebay_get_traffic_report" => analytics::get_traffic_report(
                &v.ensure_string(args, "dimension")?,
                &v.ensure_string(args, "filter")?,
                &v.ensure_string(args, "metric")?,
                v.optional_string(args, "sort")?.as_deref(),
            ),
            "ebay_find_seller_standards_profiles" => analytics::find_seller_standards_profiles(),
            "ebay_get_seller_standards_profile" => analytics::get_seller_standards_profile(
                &v.ensure_string(args, "program")?,
                &v.ensure_string(args, "cycle")?,
            ),
            "ebay_get_customer_service_metric" => analytics::get_customer_service_metric(
                &v.ensure_string(args, "customerServiceMetricType")?,
                &v.ensure_string(args, "evaluationType")?,
                &v.ensure_string(args, "evaluationMarketplaceId")?,
            ),
            _ => return Err(unrouted_tool_error("analytics", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for AnalyticsManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
