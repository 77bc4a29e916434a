//! Argument decoding and validation for tool calls.
//!
//! Arguments arrive as untyped JSON. Each tool has a typed argument struct;
//! serde enforces presence, JSON types and enum values, and
//! [`ToolArguments::validate`] adds the constraints serde cannot express.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Arguments that failed to decode or validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ArgumentError(String);

impl ArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Typed arguments for one tool.
pub trait ToolArguments: DeserializeOwned {
    /// Checks constraints beyond shape and type.
    fn validate(&self) -> Result<(), ArgumentError> {
        Ok(())
    }
}

/// Decodes and validates `arguments`. `null` is treated as `{}`.
pub fn parse_arguments<T: ToolArguments>(arguments: &Value) -> Result<T, ArgumentError> {
    let decoded = match arguments {
        Value::Null => serde_json::from_value(Value::Object(Map::new())),
        Value::Object(_) => serde_json::from_value(arguments.clone()),
        other => {
            return Err(ArgumentError::new(format!(
                "arguments must be a JSON object, got {}",
                json_type_name(other)
            )))
        }
    };

    let args: T = decoded.map_err(|e| ArgumentError::new(e.to_string()))?;
    args.validate()?;
    Ok(args)
}

/// Rejects empty strings for fields that end up in a URL path.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::new(format!("`{}` must not be empty", field)));
    }
    Ok(())
}

/// Rejects IDs that cannot stand as a single URL path segment.
pub fn require_resource_id(field: &str, value: &str) -> Result<(), ArgumentError> {
    require_non_empty(field, value)?;
    if value == "." || value == ".." {
        return Err(ArgumentError::new(format!("`{}` is not a valid identifier", field)));
    }
    Ok(())
}

pub fn require_min_items<T>(field: &str, items: &[T], min: usize) -> Result<(), ArgumentError> {
    if items.len() < min {
        return Err(ArgumentError::new(format!(
            "`{}` must contain at least {} item(s)",
            field, min
        )));
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
