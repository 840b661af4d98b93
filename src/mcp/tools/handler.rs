//! Tool handler trait and common helpers

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (search, detect_domain, ...) implements this trait
/// to provide schema and execution logic.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "search")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Wrap text in a single text content block
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
    }
}

/// Serialize `value` as pretty JSON inside a text content block
pub fn json_content<T: Serialize>(value: &T) -> Result<ToolResult, McpError> {
    Ok(text_content(serde_json::to_string_pretty(value)?))
}

/// Deserialize tool arguments, reporting failures as invalid params
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    // Clients may omit `arguments` entirely
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}
