use crate::errors::ToolError;
use crate::mcp::aliases::short_alias;
use crate::utils::suggest::suggest;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static TOOL_CATALOG: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tool_catalog.json"));
    serde_json::from_str(raw).expect("tool_catalog.json must be valid JSON")
});

static TOOL_MAP: Lazy<HashMap<String, ToolDef>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .cloned()
        .map(|tool| (tool.name.clone(), tool))
        .collect()
});

static TOOL_VALIDATORS: Lazy<HashMap<String, JSONSchema>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for tool in TOOL_CATALOG.iter() {
        if let Ok(schema) = JSONSchema::compile(&tool.input_schema) {
            map.insert(tool.name.clone(), schema);
        }
    }
    map
});

pub fn tool_catalog() -> &'static Vec<ToolDef> {
    &TOOL_CATALOG
}

pub fn tool_by_name(name: &str) -> Option<&'static ToolDef> {
    TOOL_MAP.get(name)
}

/// Names of catalog tools whose schema failed to compile.
pub fn invalid_schemas() -> Vec<String> {
    TOOL_CATALOG
        .iter()
        .filter(|tool| !TOOL_VALIDATORS.contains_key(&tool.name))
        .map(|tool| tool.name.clone())
        .collect()
}

pub fn validate_tool_args(tool_name: &str, args: &Value) -> Result<(), ToolError> {
    let (Some(tool), Some(schema)) = (tool_by_name(tool_name), TOOL_VALIDATORS.get(tool_name))
    else {
        return Ok(());
    };
    if let Err(errors) = schema.validate(args) {
        let message = format_schema_errors(tool_name, args, errors, &tool.input_schema);
        return Err(ToolError::invalid_params(message));
    }
    Ok(())
}

fn format_schema_errors(
    tool_name: &str,
    args: &Value,
    errors: jsonschema::ErrorIterator,
    schema: &Value,
) -> String {
    let mut rendered = Vec::new();
    let mut did_you_means = Vec::new();

    for err in errors.take(10) {
        let instance_path = if err.instance_path.to_string().is_empty() {
            "(root)".to_string()
        } else {
            err.instance_path.to_string()
        };
        match &err.kind {
            jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => {
                let known: Vec<String> = schema_parent_at(schema, &err.schema_path.to_string())
                    .and_then(|parent| parent.get("properties").and_then(|v| v.as_object()).cloned())
                    .map(|map| map.keys().cloned().collect())
                    .unwrap_or_default();
                for unknown in unexpected {
                    rendered.push(format!("{}: unknown field '{}'", instance_path, unknown));
                    let suggestions = suggest(unknown, &known, 3);
                    if !suggestions.is_empty() {
                        did_you_means.push(format!(
                            "field '{}': {}",
                            unknown,
                            suggestions.join(", ")
                        ));
                    }
                }
            }
            jsonschema::error::ValidationErrorKind::Enum { options } => {
                let allowed: Vec<String> = options
                    .as_array()
                    .map(|arr| {
                        arr.iter()
                            .map(|v| {
                                v.as_str()
                                    .map(|s| s.to_string())
                                    .unwrap_or_else(|| v.to_string())
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                rendered.push(format!(
                    "{}: expected one of {}",
                    instance_path,
                    allowed.join(", ")
                ));
                let received = value_at(args, &err.instance_path.to_string());
                let suggestions = suggest(received.as_str().unwrap_or(""), &allowed, 3);
                if !suggestions.is_empty() {
                    did_you_means.push(format!("{}: {}", instance_path, suggestions.join(", ")));
                }
            }
            jsonschema::error::ValidationErrorKind::Required { property } => {
                let prop = property
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| property.to_string());
                rendered.push(format!(
                    "{}: missing required field '{}'",
                    instance_path, prop
                ));
            }
            jsonschema::error::ValidationErrorKind::Type { kind } => {
                rendered.push(format!(
                    "{}: expected {}",
                    instance_path,
                    format_type_kind(kind)
                ));
            }
            _ => {
                rendered.push(format!("{}: {}", instance_path, err));
            }
        }
    }

    let mut lines = vec![format!("Invalid arguments for {}", tool_name)];
    lines.extend(rendered.iter().map(|line| format!("- {}", line)));
    if !did_you_means.is_empty() {
        lines.push(format!(
            "Did you mean: {}",
            did_you_means
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(" | ")
        ));
    }
    lines.join("\n")
}

fn format_type_kind(kind: &jsonschema::error::TypeKind) -> String {
    match kind {
        jsonschema::error::TypeKind::Single(primitive) => primitive.to_string(),
        jsonschema::error::TypeKind::Multiple(types) => {
            let list: Vec<String> = (*types).into_iter().map(|t| t.to_string()).collect();
            if list.is_empty() {
                "unknown".to_string()
            } else {
                list.join(" | ")
            }
        }
    }
}

/// Schema node owning the keyword at `schema_path` (e.g. the object for `/additionalProperties`).
fn schema_parent_at<'a>(schema: &'a Value, schema_path: &str) -> Option<&'a Value> {
    let segments: Vec<&str> = schema_path.split('/').filter(|s| !s.is_empty()).collect();
    let parent = segments.split_last().map(|(_, rest)| rest).unwrap_or(&[]);
    let mut current = schema;
    for segment in parent {
        current = match current {
            Value::Object(obj) => obj.get(*segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn value_at(root: &Value, instance_path: &str) -> Value {
    let mut current = root;
    for segment in instance_path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(obj) => obj.get(segment).unwrap_or(&Value::Null),
            Value::Array(arr) => segment
                .parse::<usize>()
                .ok()
                .and_then(|idx| arr.get(idx))
                .unwrap_or(&Value::Null),
            _ => &Value::Null,
        };
    }
    current.clone()
}

/// Catalog as advertised by `tools/list`; unprefixed aliases are appended on request.
pub fn list_tools(include_aliases: bool) -> Vec<ToolDef> {
    let mut tools: Vec<ToolDef> = TOOL_CATALOG.iter().cloned().collect();
    if !include_aliases {
        return tools;
    }
    let mut names: HashSet<String> = tools.iter().map(|tool| tool.name.clone()).collect();
    for tool in TOOL_CATALOG.iter() {
        let Some(alias) = short_alias(&tool.name) else {
            continue;
        };
        if !names.insert(alias.to_string()) {
            continue;
        }
        tools.push(ToolDef {
            name: alias.to_string(),
            description: format!("Alias for {}.", tool.name),
            input_schema: tool.input_schema.clone(),
        });
    }
    tools
}
