use crate::api::{marketing, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_campaigns",
    "ebay_get_campaign",
    "ebay_get_campaign_by_name",
    "ebay_create_campaign",
    "ebay_pause_campaign",
    "ebay_resume_campaign",
    "ebay_end_campaign",
    "ebay_get_ads",
    "ebay_get_ad",
    "ebay_delete_ad",
    "ebay_get_ad_groups",
    "ebay_get_ad_group",
    "ebay_get_promotions",
    "ebay_get_item_promotion",
    "ebay_create_item_promotion",
    "ebay_get_ad_report_metadata",
    "ebay_get_ad_report_metadata_for_report_type",
];

#[derive(Clone)]
pub struct MarketingManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl MarketingManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("marketing"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let campaign_id = || v.ensure_string(args, "campaignId");
        let request = match tool {
            "ebay_get_campaigns" => marketing::get_campaigns(
                v.optional_string(args, "campaignStatus")?.as_deref(),
                v.optional_string(args, "marketplaceId")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
            ),
            "ebay_get_campaign" => marketing::get_campaign(&campaign_id()?),
            "ebay_get_campaign_by_name" => {
                marketing::get_campaign_by_name(&v.ensure_string(args, "campaignName")?)
            }
            "ebay_create_campaign" => marketing::create_campaign(v.ensure_object(args, "campaign")?),
            "ebay_pause_campaign" => marketing::pause_campaign(&campaign_id()?),
            "ebay_resume_campaign" => marketing::resume_campaign(&campaign_id()?),
            "ebay_end_campaign" => marketing::end_campaign(&campaign_id()?),
            "ebay_get_ads" => marketing::get_ads(
                &campaign_id()?,
                v.optional_string(args, "adGroupIds")?.as_deref(),
                v.optional_string(args, "adStatus")?.as_deref(),
                v.optional_string(args, "listingIds")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_ad" => marketing::get_ad(&campaign_id()?, &v.ensure_string(args, "adId")?),
            "ebay_delete_ad" => {
                marketing::delete_ad(&campaign_id()?, &v.ensure_string(args, "adId")?)
            }
            "ebay_get_ad_groups" => marketing::get_ad_groups(
                &campaign_id()?,
                v.optional_string(args, "adGroupStatus")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_ad_group" => {
                marketing::get_ad_group(&campaign_id()?, &v.ensure_string(args, "adGroupId")?)
            }
            "ebay_get_promotions" => marketing::get_promotions(
                v.optional_string(args, "marketplaceId")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
            ),
            "ebay_get_item_promotion" => {
                marketing::get_item_promotion(&v.ensure_string(args, "promotionId")?)
            }
            "ebay_create_item_promotion" => {
                marketing::create_item_promotion(v.ensure_object(args, "promotion")?)
            }
            "ebay_get_ad_report_metadata" => marketing::get_ad_report_metadata(),
            "ebay_get_ad_report_metadata_for_report_type" => {
                marketing::get_ad_report_metadata_for_report_type(
                    &v.ensure_string(args, "reportType")?,
                )
            }
            _ => return Err(unrouted_tool_error("marketing", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for MarketingManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
