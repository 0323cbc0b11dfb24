use crate::api::{inventory, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_inventory_items",
    "ebay_get_inventory_item",
    "ebay_create_inventory_item",
    "ebay_delete_inventory_item",
    "ebay_get_offers",
    "ebay_get_offer",
    "ebay_create_offer",
    "ebay_publish_offer",
    "ebay_withdraw_offer",
];

#[derive(Clone)]
pub struct InventoryManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl InventoryManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("inventory"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let request = match tool {
            "ebay_get_inventory_items" => inventory::get_inventory_items(
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_inventory_item" => inventory::get_inventory_item(&v.ensure_string(args, "sku")?),
            "ebay_create_inventory_item" => inventory::create_or_replace_inventory_item(
                &v.ensure_string(args, "sku")?,
                v.ensure_object(args, "inventoryItem")?,
            ),
            "ebay_delete_inventory_item" => {
                inventory::delete_inventory_item(&v.ensure_string(args, "sku")?)
            }
            "ebay_get_offers" => inventory::get_offers(
                v.optional_string(args, "sku")?.as_deref(),
                v.optional_string(args, "marketplaceId")?.as_deref(),
                v.optional_u64(args, "limit", 1)?,
                v.optional_u64(args, "offset", 0)?,
            ),
            "ebay_get_offer" => inventory::get_offer(&v.ensure_string(args, "offerId")?),
            "ebay_create_offer" => inventory::create_offer(v.ensure_object(args, "offer")?),
            "ebay_publish_offer" => inventory::publish_offer(&v.ensure_string(args, "offerId")?),
            "ebay_withdraw_offer" => inventory::withdraw_offer(&v.ensure_string(args, "offerId")?),
            _ => return Err(unrouted_tool_error("inventory", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for InventoryManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
