//! Stack guideline search tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::catalog::Stack;
use crate::core::services::Services;
use crate::core::types::StackSearchRequest;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchStackHandler {
    services: Arc<Services>,
}

impl SearchStackHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchStackHandler {
    fn name(&self) -> &str {
        "search_stack"
    }

    fn schema(&self) -> ToolSchema {
        let stacks: Vec<&str> = Stack::ALL.iter().map(Stack::as_str).collect();
        let search = &self.services.config.search;

        ToolSchema {
            name: "search_stack".to_string(),
            description: "Search implementation guidelines (do/don't, code examples, severity) \
                          for one technology stack. Use detect_stack to find a project's stack."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. 'form validation'",
                        "maxLength": search.max_query_length
                    },
                    "stack": {
                        "type": "string",
                        "description": "Stack to search",
                        "enum": stacks
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum results to return",
                        "default": search.default_max_results,
                        "minimum": 1,
                        "maximum": search.max_results_cap
                    }
                },
                "required": ["query", "stack"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request: StackSearchRequest = parse_args(args)?;
        let response = self.services.search.search_stack(request)?;
        json_content(&response)
    }
}
