use crate::errors::ToolError;
use serde_json::{Map, Value};

/// Typed accessors over a tool's JSON arguments.
///
/// Absent, `null` and empty-string values all read as "not provided" so that
/// optional query parameters are dropped instead of being sent empty.
#[derive(Clone, Copy, Default)]
pub struct Validation;

impl Validation {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_string(&self, args: &Value, key: &str) -> Result<String, ToolError> {
        self.optional_string(args, key)?
            .ok_or_else(|| ToolError::invalid_params(format!("{} is required", key)))
    }

    pub fn optional_string(&self, args: &Value, key: &str) -> Result<Option<String>, ToolError> {
        match args.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Some(Value::Number(num)) => Ok(Some(num.to_string())),
            Some(_) => Err(ToolError::invalid_params(format!(
                "{} must be a string",
                key
            ))),
        }
    }

    /// Reads a JSON integer no smaller than `min`.
    pub fn optional_u64(
        &self,
        args: &Value,
        key: &str,
        min: u64,
    ) -> Result<Option<u64>, ToolError> {
        let raw = match args.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => value,
        };
        let numeric = raw.as_u64().ok_or_else(|| {
            ToolError::invalid_params(format!("{} must be a non-negative integer", key))
        })?;
        if numeric < min {
            return Err(ToolError::invalid_params(format!(
                "{} must be at least {}",
                key, min
            )));
        }
        Ok(Some(numeric))
    }

    pub fn ensure_object(&self, args: &Value, key: &str) -> Result<Value, ToolError> {
        match args.get(key) {
            Some(Value::Object(map)) => Ok(Value::Object(map.clone())),
            None | Some(Value::Null) => {
                Err(ToolError::invalid_params(format!("{} is required", key)))
            }
            Some(_) => Err(ToolError::invalid_params(format!(
                "{} must be an object",
                key
            ))),
        }
    }

    /// Treats `null` arguments as an empty object.
    pub fn normalize_args(&self, args: Value) -> Result<Value, ToolError> {
        match args {
            Value::Null => Ok(Value::Object(Map::new())),
            Value::Object(_) => Ok(args),
            _ => Err(ToolError::invalid_params("arguments must be an object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Validation;
    use serde_json::json;

    #[test]
    fn empty_and_null_strings_are_absent() {
        let v = Validation::new();
        let args = json!({"a": "", "b": null, "c": "  EBAY_US "});
        assert_eq!(v.optional_string(&args, "a").unwrap(), None);
        assert_eq!(v.optional_string(&args, "b").unwrap(), None);
        assert_eq!(v.optional_string(&args, "missing").unwrap(), None);
        assert_eq!(
            v.optional_string(&args, "c").unwrap().as_deref(),
            Some("EBAY_US")
        );
    }

    #[test]
    fn integers_enforce_type_and_minimum() {
        let v = Validation::new();
        let args = json!({"limit": 25, "offset": 0, "bad": -3, "zero": 0, "text": "25"});
        assert_eq!(v.optional_u64(&args, "limit", 1).unwrap(), Some(25));
        assert_eq!(v.optional_u64(&args, "missing", 1).unwrap(), None);
        assert!(v.optional_u64(&args, "text", 1).is_err());
        assert_eq!(v.optional_u64(&args, "offset", 0).unwrap(), Some(0));
        assert!(v.optional_u64(&args, "bad", 0).is_err());
        assert!(v.optional_u64(&args, "zero", 1).is_err());
    }

    #[test]
    fn required_values_report_the_key() {
        let v = Validation::new();
        let err = v.ensure_string(&json!({}), "sku").unwrap_err();
        assert_eq!(err.message, "sku is required");
        let err = v.ensure_object(&json!({"offer": "x"}), "offer").unwrap_err();
        assert_eq!(err.message, "offer must be an object");
    }
}
