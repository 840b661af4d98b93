//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod detect_domain;
pub mod detect_stack;
pub mod search;
pub mod search_stack;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use detect_domain::DetectDomainArgs;
pub use detect_stack::DetectStackArgs;
pub use search::SearchArgs;
pub use search_stack::SearchStackArgs;
