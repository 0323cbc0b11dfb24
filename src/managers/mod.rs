//! One [`ToolHandler`](crate::services::tool_executor::ToolHandler) per resource group.
//! Each module exports the tool names it serves in `TOOLS`.

pub mod account;
pub mod analytics;
pub mod auth;
pub mod feedback;
pub mod fulfillment;
pub mod inventory;
pub mod marketing;
pub mod message;
pub mod metadata;
pub mod negotiation;
pub mod notification;
pub mod status;
