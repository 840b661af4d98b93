//! Tech-stack detection tool handler

use super::handler::{json_content, parse_args, McpToolHandler};
use crate::core::stack_detect::detect_tech_stack;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct DetectStackArgs {
    #[serde(default)]
    project_dir: Option<PathBuf>,
}

#[derive(Default)]
pub struct DetectStackHandler;

impl DetectStackHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpToolHandler for DetectStackHandler {
    fn name(&self) -> &str {
        "detect_stack"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "detect_stack".to_string(),
            description: "Detect a project's tech stack from package.json, pubspec.yaml, \
                          Swift sources or Gradle Kotlin scripts. Falls back to html-tailwind."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_dir": {
                        "type": "string",
                        "description": "Absolute project path (defaults to the server's working directory)"
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: DetectStackArgs = parse_args(args)?;
        let dir = args.project_dir.unwrap_or_else(|| PathBuf::from("."));

        // Walking a large tree is blocking work
        let scan_dir = dir.clone();
        let stack = tokio::task::spawn_blocking(move || detect_tech_stack(&scan_dir))
            .await
            .map_err(|e| McpError::InternalError(format!("Stack detection failed: {e}")))??;

        json_content(&json!({
            "project_dir": dir.display().to_string(),
            "stack": stack
        }))
    }
}
