use std::borrow::Cow;

pub const TOOL_PREFIX: &str = "ebay_";

/// `get_orders` and `ebay_get_orders` name the same tool.
pub fn canonical_tool_name(tool: &str) -> Cow<'_, str> {
    let trimmed = tool.trim();
    if trimmed.starts_with(TOOL_PREFIX) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("{}{}", TOOL_PREFIX, trimmed))
    }
}

pub fn short_alias(tool: &str) -> Option<&str> {
    tool.strip_prefix(TOOL_PREFIX).filter(|rest| !rest.is_empty())
}
