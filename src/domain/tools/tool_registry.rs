//! Tool Registry - ordered catalog of tool definitions.
//!
//! `tools/list` must return tools in a stable order, so definitions are kept
//! in registration order with a name index on the side.
//!
//! # Example
//!
//! ```
//! use recurrente_mcp::domain::tools::{ToolDefinition, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(ToolDefinition::new(
//!     "list_coupons",
//!     "List all coupons (paginated)",
//!     serde_json::json!({ "type": "object", "properties": {} }),
//! ));
//!
//! assert!(registry.has_tool("list_coupons"));
//! assert_eq!(registry.tool_count(), 1);
//! ```

use std::collections::HashMap;

use super::ToolDefinition;

#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    /// Definitions in registration order
    tools: Vec<ToolDefinition>,

    /// Position of each tool in `tools`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool. A definition with the same name is replaced in place.
    pub fn register(&mut self, definition: ToolDefinition) {
        let existing = self.index.get(definition.name()).copied();
        match existing {
            Some(position) => self.tools[position] = definition,
            None => {
                self.index
                    .insert(definition.name().to_string(), self.tools.len());
                self.tools.push(definition);
            }
        }
    }

    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All definitions in registration order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Every tool in `tools/list` entry format.
    pub fn to_mcp_tools(&self) -> Vec<serde_json::Value> {
        self.tools.iter().map(ToolDefinition::to_mcp_format).collect()
    }
}

impl FromIterator<ToolDefinition> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = ToolDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for definition in iter {
            registry.register(definition);
        }
        registry
    }
}
