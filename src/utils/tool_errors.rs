use crate::errors::ToolError;
use crate::utils::suggest::suggest;

/// Unknown-tool error with a did-you-mean hint drawn from `known_tools`.
pub fn unknown_tool_error(tool: &str, known_tools: &[String]) -> ToolError {
    let suggestions = if tool.trim().is_empty() {
        Vec::new()
    } else {
        suggest(tool, known_tools, 5)
    };
    let mut err = ToolError::unknown_tool(tool);
    if !suggestions.is_empty() {
        err = err.with_hint(format!("Did you mean: {}?", suggestions.join(", ")));
    }
    err.with_details(serde_json::json!({
        "tool": tool,
        "did_you_mean": suggestions,
    }))
}

/// Raised by a group handler asked for a tool it does not own; indicates a wiring bug.
pub fn unrouted_tool_error(group: &str, tool: &str) -> ToolError {
    ToolError::internal(format!("{} handler cannot serve tool {}", group, tool))
        .with_hint("Every tool in tool_catalog.json must be routed to the handler that implements it.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_suggests_close_names() {
        let known = vec!["ebay_get_orders".to_string(), "ebay_get_order".to_string()];
        let err = unknown_tool_error("ebay_get_ordrs", &known);
        assert_eq!(err.message, "Unknown tool: ebay_get_ordrs");
        assert!(err.hint.unwrap_or_default().contains("ebay_get_orders"));
    }

    #[test]
    fn empty_name_has_no_suggestions() {
        let err = unknown_tool_error("", &["ebay_get_orders".to_string()]);
        assert!(err.hint.is_none());
    }
}
