pub fn is_truthy(value: impl AsRef<str>) -> bool {
    matches!(
        value.as_ref().trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn is_truthy_any_env(keys: &[&str]) -> bool {
    keys.iter()
        .any(|key| std::env::var(key).ok().map(is_truthy).unwrap_or(false))
}

/// Opt-in listing of the unprefixed tool aliases in `tools/list`.
pub fn is_list_aliases_enabled() -> bool {
    is_truthy_any_env(&["EBAY_MCP_LIST_ALIASES"])
}
