use crate::api::metadata::{self, MarketplacePolicy};
use crate::api::ApiRequest;
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

const POLICY_TOOLS: &[(&str, MarketplacePolicy)] = &[
    (
        "ebay_get_automotive_parts_compatibility_policies",
        MarketplacePolicy::AutomotivePartsCompatibility,
    ),
    ("ebay_get_category_policies", MarketplacePolicy::Category),
    (
        "ebay_get_extended_producer_responsibility_policies",
        MarketplacePolicy::ExtendedProducerResponsibility,
    ),
    ("ebay_get_item_condition_policies", MarketplacePolicy::ItemCondition),
    ("ebay_get_listing_structure_policies", MarketplacePolicy::ListingStructure),
    ("ebay_get_negotiated_price_policies", MarketplacePolicy::NegotiatedPrice),
    ("ebay_get_regulatory_policies", MarketplacePolicy::Regulatory),
    ("ebay_get_marketplace_return_policies", MarketplacePolicy::Return),
    ("ebay_get_shipping_cost_type_policies", MarketplacePolicy::ShippingCostType),
];

pub const TOOLS: &[&str] = &[
    "ebay_get_automotive_parts_compatibility_policies",
    "ebay_get_category_policies",
    "ebay_get_extended_producer_responsibility_policies",
    "ebay_get_item_condition_policies",
    "ebay_get_listing_structure_policies",
    "ebay_get_negotiated_price_policies",
    "ebay_get_regulatory_policies",
    "ebay_get_marketplace_return_policies",
    "ebay_get_shipping_cost_type_policies",
    "ebay_get_hazardous_materials_labels",
    "ebay_get_product_safety_labels",
];

#[derive(Clone)]
pub struct MetadataManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl MetadataManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("metadata"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        if let Some((_, kind)) = POLICY_TOOLS.iter().find(|(name, _)| *name == tool) {
            return Ok(metadata::get_policies(
                *kind,
                &v.ensure_string(args, "marketplaceId")?,
                v.optional_string(args, "filter")?.as_deref(),
            ));
        }
        let request = match tool {
            "ebay_get_hazardous_materials_labels" => {
                metadata::get_hazardous_materials_labels(&v.ensure_string(args, "marketplaceId")?)
            }
            "ebay_get_product_safety_labels" => {
                metadata::get_product_safety_labels(&v.ensure_string(args, "marketplaceId")?)
            }
            _ => return Err(unrouted_tool_error("metadata", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for MetadataManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
