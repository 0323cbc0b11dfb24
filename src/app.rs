use crate::errors::ToolError;
use crate::managers;
use crate::mcp::catalog::{invalid_schemas, tool_catalog};
use crate::services::api_status::ApiStatusService;
use crate::services::config::EbayConfig;
use crate::services::http_client::{build_http_client, EbayApiClient};
use crate::services::logger::Logger;
use crate::services::token_manager::TokenManager;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use crate::services::validation::Validation;
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub config: Arc<EbayConfig>,
    pub tool_executor: Arc<ToolExecutor>,
    pub tokens: Arc<TokenManager>,
    pub api: Arc<EbayApiClient>,
}

fn register(
    handlers: &mut HashMap<String, Arc<dyn ToolHandler>>,
    tools: &[&str],
    handler: Arc<dyn ToolHandler>,
) {
    for tool in tools {
        handlers.insert((*tool).to_string(), handler.clone());
    }
}

impl App {
    fn validate_tool_wiring(
        handlers: &HashMap<String, Arc<dyn ToolHandler>>,
    ) -> Result<(), ToolError> {
        let broken = invalid_schemas();
        if !broken.is_empty() {
            return Err(ToolError::internal("Tool catalog contains invalid schemas")
                .with_details(serde_json::json!({ "invalid_schemas": broken })));
        }

        let mut missing: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| !handlers.contains_key(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_hint("Every tool in tool_catalog.json must be registered with a handler.")
            .with_details(serde_json::json!({ "missing_tools": missing })))
    }

    /// Reads credentials from the environment and wires every handler.
    pub fn initialize() -> Result<Self, ToolError> {
        Self::with_config(EbayConfig::from_env()?)
    }

    pub fn with_config(config: EbayConfig) -> Result<Self, ToolError> {
        let logger = Logger::new("ebay-mcp");
        let validation = Validation::new();
        let config = Arc::new(config);

        let client = build_http_client(&config)?;
        let tokens = Arc::new(TokenManager::new(
            logger.clone(),
            config.clone(),
            client.clone(),
        ));
        let api = Arc::new(EbayApiClient::new(
            logger.clone(),
            config.clone(),
            client.clone(),
            tokens.clone(),
        ));
        let status_service = Arc::new(ApiStatusService::new(
            logger.clone(),
            client,
            config.status_feed_url.clone(),
        ));

        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        register(
            &mut handlers,
            managers::account::TOOLS,
            Arc::new(managers::account::AccountManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::inventory::TOOLS,
            Arc::new(managers::inventory::InventoryManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::fulfillment::TOOLS,
            Arc::new(managers::fulfillment::FulfillmentManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::marketing::TOOLS,
            Arc::new(managers::marketing::MarketingManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::analytics::TOOLS,
            Arc::new(managers::analytics::AnalyticsManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::metadata::TOOLS,
            Arc::new(managers::metadata::MetadataManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::message::TOOLS,
            Arc::new(managers::message::MessageManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::negotiation::TOOLS,
            Arc::new(managers::negotiation::NegotiationManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::feedback::TOOLS,
            Arc::new(managers::feedback::FeedbackManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::notification::TOOLS,
            Arc::new(managers::notification::NotificationManager::new(
                logger.clone(),
                validation.clone(),
                api.clone(),
            )),
        );
        register(
            &mut handlers,
            managers::auth::TOOLS,
            Arc::new(managers::auth::AuthManager::new(logger.clone(), tokens.clone())),
        );
        register(
            &mut handlers,
            managers::status::TOOLS,
            Arc::new(managers::status::StatusManager::new(
                logger.clone(),
                validation.clone(),
                status_service,
            )),
        );

        Self::validate_tool_wiring(&handlers)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), validation, handlers));
        logger.info(
            "server ready",
            Some(&serde_json::json!({
                "environment": config.environment.as_str(),
                "tools": tool_executor.tool_names().len(),
            })),
        );

        Ok(Self {
            logger,
            config,
            tool_executor,
            tokens,
            api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::EbayEnvironment;

    #[test]
    fn every_catalog_tool_is_wired() {
        let config = EbayConfig::new("id", "secret", EbayEnvironment::Sandbox)
            .with_api_base_url("http://127.0.0.1:9");
        let app = App::with_config(config).unwrap();
        for tool in tool_catalog().iter() {
            assert!(app.tool_executor.has_handler(&tool.name), "{}", tool.name);
        }
        assert_eq!(app.tool_executor.tool_names().len(), tool_catalog().len());
    }

    #[test]
    fn missing_handlers_fail_startup() {
        let err = App::validate_tool_wiring(&HashMap::new()).unwrap_err();
        assert_eq!(err.message, "Tool wiring is incomplete");
        let missing = err.details.unwrap()["missing_tools"].as_array().unwrap().len();
        assert_eq!(missing, tool_catalog().len());
    }
}
