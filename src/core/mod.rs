//! Core domain logic (protocol-agnostic)
//!
//! This module contains all search logic that is independent
//! of how requests arrive (CLI, MCP, library calls).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Rows, records, requests and responses
//! - **xdg**: XDG directory handling
//! - **catalog**: Domain and stack corpus descriptors
//! - **source**: Corpus source collaborators (CSV)
//! - **query**: Tokenizer, translation, synonyms, typo correction
//! - **index**: Corpus statistics and the index cache
//! - **search**: BM25 scorer, domain router, search service
//! - **stack_detect**: Project tech-stack detection
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod services;
pub mod source;
pub mod stack_detect;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, UxlexError};
pub use services::Services;
