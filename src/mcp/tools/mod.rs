//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose uxlex's
//! search and detection operations to MCP clients.

pub mod detect_domain;
pub mod detect_stack;
pub mod handler;
pub mod registry;
pub mod search;
pub mod search_stack;

pub use detect_domain::DetectDomainHandler;
pub use detect_stack::DetectStackHandler;
pub use handler::{json_content, parse_args, text_content, McpToolHandler};
pub use registry::ToolRegistry;
pub use search::SearchHandler;
pub use search_stack::SearchStackHandler;
