//! Tool definition - name, description and input schema for a tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of a tool that an MCP client can invoke.
///
/// # Examples
///
/// ```
/// use recurrente_mcp::domain::tools::ToolDefinition;
///
/// let definition = ToolDefinition::new(
///     "get_coupon",
///     "Get coupon details by ID",
///     serde_json::json!({
///         "type": "object",
///         "required": ["id"],
///         "properties": {
///             "id": { "type": "string", "description": "Coupon ID" }
///         }
///     }),
/// );
///
/// assert_eq!(definition.to_mcp_format()["inputSchema"]["required"][0], "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "create_checkout")
    name: String,

    /// Human-readable description shown to the model
    description: String,

    /// JSON Schema for the arguments
    input_schema: Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    /// Names listed under the schema's `required` key.
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Converts to the `tools/list` entry format.
    pub fn to_mcp_format(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema
        })
    }
}
