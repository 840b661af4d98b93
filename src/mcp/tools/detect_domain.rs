//! Domain routing tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct DetectDomainArgs {
    query: String,
}

pub struct DetectDomainHandler {
    services: Arc<Services>,
}

impl DetectDomainHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DetectDomainHandler {
    fn name(&self) -> &str {
        "detect_domain"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "detect_domain".to_string(),
            description: "Report which design domain a query would be searched in when no \
                          domain is given (keyword heuristic, defaults to style)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Query to route"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: DetectDomainArgs = parse_args(args)?;
        let domain = self.services.search.route(&args.query);
        json_content(&json!({ "query": args.query, "domain": domain }))
    }
}
