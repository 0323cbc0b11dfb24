pub mod api_status;
pub mod config;
pub mod http_client;
pub mod logger;
pub mod token_manager;
pub mod tool_executor;
pub mod validation;
