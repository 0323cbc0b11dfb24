use crate::app::App;
use crate::errors::{ErrorCode, McpError, ToolError, ToolErrorKind};
use crate::mcp::catalog::list_tools;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use crate::utils::feature_flags::is_list_aliases_enabled;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

const PROTOCOL_VERSION: &str = "2025-06-18";
const SERVER_NAME: &str = "ebay-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn with_hint(message: String, error: &ToolError) -> String {
    match &error.hint {
        Some(hint) if !message.contains(hint.as_str()) => format!("{}\n{}", message, hint),
        _ => message,
    }
}

fn error_data(error: &ToolError) -> Value {
    serde_json::json!({
        "kind": error.kind,
        "code": error.code,
        "retryable": error.retryable,
        "details": error.details,
    })
}

pub fn map_tool_error(error: &ToolError) -> McpError {
    match error.kind {
        ToolErrorKind::Authentication => McpError::new(
            ErrorCode::InvalidRequest,
            format!("Authentication failed: {}", error.message),
        ),
        ToolErrorKind::UnknownTool | ToolErrorKind::InvalidParams => McpError::new(
            ErrorCode::InvalidParams,
            with_hint(error.message.clone(), error),
        ),
        _ => McpError::new(
            ErrorCode::InternalError,
            format!("Tool execution failed: {}", error.message),
        ),
    }
}

pub struct McpServer {
    app: Arc<App>,
}

impl McpServer {
    pub async fn new() -> Result<Self, ToolError> {
        let app = App::initialize()?;
        Ok(Self { app: Arc::new(app) })
    }

    pub fn from_app(app: Arc<App>) -> Self {
        Self { app }
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": SERVER_NAME, "version": SERVER_VERSION},
        })
    }

    fn handle_tools_list(&self) -> Value {
        let tools = list_tools(is_list_aliases_enabled());
        serde_json::json!({ "tools": tools })
    }

    async fn handle_tools_call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let result = self.app.tool_executor.execute(name, args).await?;
        let text = serde_json::to_string_pretty(&result)
            .map_err(|err| ToolError::internal(err.to_string()))?;
        Ok(serde_json::json!({
            "content": [ { "type": "text", "text": text } ]
        }))
    }

    /// Answers one parsed request; `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        match request.method.as_str() {
            _ if request.is_notification() => None,
            _ if request.method.starts_with("notifications/") => request
                .id
                .map(|id| JsonRpcResponse::success(id, serde_json::json!({}))),
            "initialize" => request
                .id
                .map(|id| JsonRpcResponse::success(id, self.handle_initialize())),
            "ping" => request
                .id
                .map(|id| JsonRpcResponse::success(id, serde_json::json!({}))),
            "tools/list" => request
                .id
                .map(|id| JsonRpcResponse::success(id, self.handle_tools_list())),
            "tools/call" => {
                let id = request.id.unwrap_or(Value::Null);
                let params = request.params.as_object().cloned().unwrap_or_default();
                let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
                if name.is_empty() {
                    return Some(JsonRpcResponse::failure(
                        id,
                        ErrorCode::InvalidParams.as_i32(),
                        "Missing tool name",
                    ));
                }
                let args = params.get("arguments").cloned().unwrap_or(Value::Null);
                Some(match self.handle_tools_call(name, args).await {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(err) => {
                        let mapped = map_tool_error(&err);
                        JsonRpcResponse::failure(id, mapped.code.as_i32(), mapped.message)
                            .with_error_data(error_data(&err))
                    }
                })
            }
            _ => request.id.map(|id| {
                JsonRpcResponse::failure(
                    id,
                    ErrorCode::MethodNotFound.as_i32(),
                    "Method not found",
                )
            }),
        }
    }

    /// Newline-delimited JSON-RPC loop; returns when `reader` reaches EOF.
    pub async fn serve<R, W>(&self, reader: R, writer: &mut W) -> Result<(), ToolError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|err| ToolError::internal(err.to_string()))?
        {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parsed: Value = match serde_json::from_str(trimmed) {
                Ok(value) => value,
                Err(_) => {
                    let response = JsonRpcResponse::failure(
                        Value::Null,
                        ErrorCode::ParseError.as_i32(),
                        "Parse error",
                    );
                    write_response(writer, &response).await?;
                    continue;
                }
            };

            let request: JsonRpcRequest = match serde_json::from_value(parsed) {
                Ok(req) => req,
                Err(_) => {
                    let response = JsonRpcResponse::failure(
                        Value::Null,
                        ErrorCode::InvalidRequest.as_i32(),
                        "Invalid request",
                    );
                    write_response(writer, &response).await?;
                    continue;
                }
            };

            if let Some(response) = self.handle_request(request).await {
                write_response(writer, &response).await?;
            }
        }
        Ok(())
    }

    pub async fn run_stdio(&self) -> Result<(), ToolError> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut writer = BufWriter::new(tokio::io::stdout());
        self.app.logger.info("listening on stdio", None);
        self.serve(reader, &mut writer).await
    }
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &JsonRpcResponse,
) -> Result<(), ToolError> {
    let payload = serde_json::to_string(response).unwrap_or_default();
    writer.write_all(payload.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

pub async fn run_stdio() -> Result<(), ToolError> {
    let server = McpServer::new().await?;
    server.run_stdio().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_errors_use_invalid_request() {
        let err = map_tool_error(&ToolError::authentication("eBay API Error: Invalid access token"));
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(
            err.message,
            "Authentication failed: eBay API Error: Invalid access token"
        );
    }

    #[test]
    fn caller_mistakes_use_invalid_params_and_keep_hints() {
        let err = map_tool_error(
            &ToolError::unknown_tool("ebay_get_ordrs").with_hint("Did you mean: ebay_get_orders?"),
        );
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert_eq!(
            err.message,
            "Unknown tool: ebay_get_ordrs\nDid you mean: ebay_get_orders?"
        );

        let err = map_tool_error(&ToolError::invalid_params("Missing required field: orderId"));
        assert_eq!(err.code, ErrorCode::InvalidParams);
    }

    #[test]
    fn everything_else_is_an_execution_failure() {
        for error in [
            ToolError::upstream(404, "eBay API Error: Order not found"),
            ToolError::timeout("eBay request timed out"),
            ToolError::internal("boom"),
        ] {
            let mapped = map_tool_error(&error);
            assert_eq!(mapped.code, ErrorCode::InternalError);
            assert!(mapped.message.starts_with("Tool execution failed: "));
        }
    }
}
