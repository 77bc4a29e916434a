//! Tool call value object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::arguments::{parse_arguments, ArgumentError, ToolArguments};

/// A request to invoke a tool.
///
/// Arguments stay untyped JSON until the executor decodes them into the
/// tool's argument struct.
///
/// # Examples
///
/// ```
/// use recurrente_mcp::domain::tools::ToolCall;
///
/// let call = ToolCall::new(
///     "pause_subscription",
///     serde_json::json!({ "id": "su_123", "act": "pause" }),
/// );
///
/// assert_eq!(call.name(), "pause_subscription");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to invoke
    name: String,

    /// Arguments for the tool (JSON object, or null when omitted)
    #[serde(default)]
    arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &Value {
        &self.arguments
    }

    /// Decodes the arguments into the tool's typed struct.
    pub fn parse_arguments<T: ToolArguments>(&self) -> Result<T, ArgumentError> {
        parse_arguments(&self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_without_arguments() {
        let call: ToolCall = serde_json::from_value(json!({ "name": "list_products" })).unwrap();

        assert_eq!(call.name(), "list_products");
        assert!(call.arguments().is_null());
    }

    #[test]
    fn keeps_arguments_verbatim() {
        let call = ToolCall::new("get_product", json!({ "id": "prod_1" }));

        assert_eq!(call.arguments()["id"], "prod_1");
    }
}
