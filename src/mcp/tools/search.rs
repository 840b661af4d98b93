//! Search tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::catalog::Domain;
use crate::core::services::Services;
use crate::core::types::SearchRequest;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    max_results: Option<usize>,
}

pub struct SearchHandler {
    services: Arc<Services>,
}

impl SearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchHandler {
    fn name(&self) -> &str {
        "search"
    }

    fn schema(&self) -> ToolSchema {
        let domains: Vec<&str> = Domain::ALL.iter().map(Domain::as_str).collect();
        let search = &self.services.config.search;

        ToolSchema {
            name: "search".to_string(),
            description: "Search UI/UX design knowledge (styles, color palettes, typography, \
                          charts, landing patterns, product types, UX guidelines, icons, \
                          components, animations, React performance, web interface rules). \
                          Ranked with BM25. Queries may include Thai, Chinese or Japanese \
                          keywords and tolerate small typos. When domain is omitted it is \
                          detected from the query."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. 'glassmorphism dark dashboard'",
                        "maxLength": search.max_query_length
                    },
                    "domain": {
                        "type": "string",
                        "description": "Domain to search; detected from the query when omitted",
                        "enum": domains
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum results to return",
                        "default": search.default_max_results,
                        "minimum": 1,
                        "maximum": search.max_results_cap
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;

        let response = self.services.search.search(SearchRequest {
            query: args.query,
            domain: args.domain,
            max_results: args.max_results,
        })?;

        json_content(&response)
    }
}
