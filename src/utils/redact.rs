use crate::utils::text::truncate_utf8_prefix;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

const DEFAULT_REDACTION: &str = "[REDACTED]";
const INLINE_REDACTION: &str = "***REDACTED***";

static SENSITIVE_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "client_secret",
        "clientsecret",
        "secret",
        "token",
        "access_token",
        "refresh_token",
        "authorization",
        "password",
    ]
    .into_iter()
    .collect()
});

static INLINE_REDACTION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            // eBay OAuth application and user tokens
            Regex::new(r"\bv\^1\.1#[^\s\x22',]+").expect("inline redaction regex"),
            "v^1.1#***REDACTED***",
        ),
        (
            Regex::new(r"\beyJ[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]{10,}\b")
                .expect("inline redaction regex"),
            INLINE_REDACTION,
        ),
        (
            Regex::new(r"\b(Bearer|Basic)\s+([A-Za-z0-9._~+/=^#-]{10,})").expect("inline redaction regex"),
            "$1 ***REDACTED***",
        ),
        (
            Regex::new(r#"\b(client[_-]?secret|secret|access[_-]?token|refresh[_-]?token|token)\b\s*([:=])\s*([^\s"'`&]+)"#)
                .expect("inline redaction regex"),
            "$1$2***REDACTED***",
        ),
    ]
});

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return false;
    }
    if SENSITIVE_KEYS.contains(normalized.as_str()) {
        return true;
    }
    normalized.contains("secret") || normalized.ends_with("_token")
}

fn truncate_string(value: &str, max_length: usize) -> String {
    if max_length == usize::MAX || value.len() <= max_length {
        return value.to_string();
    }
    if max_length == 0 {
        return String::new();
    }
    format!("{}...", truncate_utf8_prefix(value, max_length))
}

fn redact_inline_secrets(value: &str, extra: Option<&[String]>) -> String {
    let mut out = value.to_string();
    for (re, replacement) in INLINE_REDACTION_PATTERNS.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *replacement).to_string();
        }
    }

    if let Some(values) = extra {
        for raw in values {
            let needle = raw.trim();
            if needle.len() < 6 {
                continue;
            }
            out = out.replace(needle, INLINE_REDACTION);
        }
    }

    out
}

pub fn redact_text(value: &str, max_string: usize, extra_secrets: Option<&[String]>) -> String {
    let redacted = redact_inline_secrets(value, extra_secrets);
    truncate_string(&redacted, max_string)
}

pub fn redact_object(value: &Value, max_string: usize, extra_secrets: Option<&[String]>) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(text) => Value::String(redact_text(text, max_string, extra_secrets)),
        Value::Bool(_) | Value::Number(_) => value.clone(),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| redact_object(item, max_string, extra_secrets))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, entry) in map.iter() {
                if is_sensitive_key(key) {
                    out.insert(key.clone(), Value::String(DEFAULT_REDACTION.to_string()));
                    continue;
                }
                out.insert(key.clone(), redact_object(entry, max_string, extra_secrets));
            }
            Value::Object(out)
        }
    }
}
