use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidParams,
    Authentication,
    UnknownTool,
    Upstream,
    Timeout,
    Transport,
    Internal,
}

#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub retryable: bool,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
            retryable: matches!(kind, ToolErrorKind::Timeout | ToolErrorKind::Transport),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, "INVALID_PARAMS", message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Authentication, "AUTHENTICATION_FAILED", message)
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(
            ToolErrorKind::UnknownTool,
            "UNKNOWN_TOOL",
            format!("Unknown tool: {}", name),
        )
    }

    /// Non-2xx answer from eBay other than 401.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        let mut err = Self::new(ToolErrorKind::Upstream, "UPSTREAM_ERROR", message);
        err.retryable = status == 429 || status >= 500;
        err.with_details(serde_json::json!({ "status": status }))
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Timeout, "TIMEOUT", message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Transport, "TRANSPORT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }

    pub fn is_authentication(&self) -> bool {
        self.kind == ToolErrorKind::Authentication
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(|v| v.as_u64())
            .map(|v| v as u16)
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}
