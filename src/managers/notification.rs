use crate::api::{notification, ApiRequest};
use crate::errors::ToolError;
use crate::services::http_client::EbayApiClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use crate::utils::tool_errors::unrouted_tool_error;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS: &[&str] = &[
    "ebay_get_notification_public_key",
    "ebay_get_notification_config",
    "ebay_update_notification_config",
    "ebay_get_notification_destinations",
    "ebay_get_notification_destination",
    "ebay_create_notification_destination",
    "ebay_update_notification_destination",
    "ebay_delete_notification_destination",
    "ebay_get_notification_subscriptions",
    "ebay_get_notification_subscription",
    "ebay_create_notification_subscription",
    "ebay_update_notification_subscription",
    "ebay_delete_notification_subscription",
    "ebay_enable_notification_subscription",
    "ebay_disable_notification_subscription",
    "ebay_test_notification_subscription",
    "ebay_create_notification_subscription_filter",
    "ebay_get_notification_subscription_filter",
    "ebay_delete_notification_subscription_filter",
    "ebay_get_notification_topic",
    "ebay_get_notification_topics",
];

#[derive(Clone)]
pub struct NotificationManager {
    logger: Logger,
    validation: Validation,
    api: Arc<EbayApiClient>,
}

impl NotificationManager {
    pub fn new(logger: Logger, validation: Validation, api: Arc<EbayApiClient>) -> Self {
        Self {
            logger: logger.child("notification"),
            validation,
            api,
        }
    }

    pub fn build_request(&self, tool: &str, args: &Value) -> Result<ApiRequest, ToolError> {
        let v = &self.validation;
        let subscription_id = || v.ensure_string(args, "subscriptionId");
        let destination_id = || v.ensure_string(args, "destinationId");
        let limit = || v.optional_u64(args, "limit", 1);
        let continuation = || v.optional_string(args, "continuationToken");
        let request = match tool {
            "ebay_get_notification_public_key" => {
                notification::get_public_key(&v.ensure_string(args, "publicKeyId")?)
            }
            "ebay_get_notification_config" => notification::get_config(),
            "ebay_update_notification_config" => {
                notification::update_config(v.ensure_object(args, "config")?)
            }
            "ebay_get_notification_destinations" => {
                notification::get_destinations(limit()?, continuation()?.as_deref())
            }
            "ebay_get_notification_destination" => {
                notification::get_destination(&destination_id()?)
            }
            "ebay_create_notification_destination" => {
                notification::create_destination(v.ensure_object(args, "destination")?)
            }
            "ebay_update_notification_destination" => notification::update_destination(
                &destination_id()?,
                v.ensure_object(args, "destination")?,
            ),
            "ebay_delete_notification_destination" => {
                notification::delete_destination(&destination_id()?)
            }
            "ebay_get_notification_subscriptions" => {
                notification::get_subscriptions(limit()?, continuation()?.as_deref())
            }
            "ebay_get_notification_subscription" => {
                notification::get_subscription(&subscription_id()?)
            }
            "ebay_create_notification_subscription" => {
                notification::create_subscription(v.ensure_object(args, "subscription")?)
            }
            "ebay_update_notification_subscription" => notification::update_subscription(
                &subscription_id()?,
                v.ensure_object(args, "subscription")?,
            ),
            "ebay_delete_notification_subscription" => {
                notification::delete_subscription(&subscription_id()?)
            }
            "ebay_enable_notification_subscription" => {
                notification::enable_subscription(&subscription_id()?)
            }
            "ebay_disable_notification_subscription" => {
                notification::disable_subscription(&subscription_id()?)
            }
            "ebay_test_notification_subscription" => {
                notification::test_subscription(&subscription_id()?)
            }
            "ebay_create_notification_subscription_filter" => {
                notification::create_subscription_filter(
                    &subscription_id()?,
                    v.ensure_object(args, "filter")?,
                )
            }
            "ebay_get_notification_subscription_filter" => notification::get_subscription_filter(
                &subscription_id()?,
                &v.ensure_string(args, "filterId")?,
            ),
            "ebay_delete_notification_subscription_filter" => {
                notification::delete_subscription_filter(
                    &subscription_id()?,
                    &v.ensure_string(args, "filterId")?,
                )
            }
            "ebay_get_notification_topic" => {
                notification::get_topic(&v.ensure_string(args, "topicId")?)
            }
            "ebay_get_notification_topics" => {
                notification::get_topics(limit()?, continuation()?.as_deref())
            }
            _ => return Err(unrouted_tool_error("notification", tool)),
        };
        Ok(request)
    }
}

#[async_trait::async_trait]
impl ToolHandler for NotificationManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle", Some(&serde_json::json!({ "tool": tool })));
        let request = self.build_request(tool, &args)?;
        self.api.execute(request).await
    }
}
