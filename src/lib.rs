//! uxlex - lexical search over UI/UX design knowledge
//!
//! A small multi-domain search engine: a free-text query (possibly with
//! Thai, Chinese or Japanese keywords, possibly misspelled) is matched
//! against CSV-backed corpora of design knowledge and ranked with BM25.
//! Built indexes are cached per corpus and rebuilt when the source file
//! changes.
//!
//! # Architecture
//!
//! - **core**: Search logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - catalog (domains, stacks and their columns)
//!   - query (tokenizer, translation, synonyms, typo correction)
//!   - index (corpus statistics, index cache)
//!   - search (BM25 scorer, domain router, search service)
//!   - source (CSV corpus reader), stack_detect
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! - **mcp**: MCP stdio adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use uxlex::{Config, Services};
//!
//! let services = Services::new(Config::load()?);
//! let response = services.search.search(uxlex::SearchRequest {
//!     query: "glassmorphism dark dashboard".to_string(),
//!     domain: None,
//!     max_results: Some(3),
//! })?;
//! println!("{} results from {}", response.count, response.file);
//! # Ok::<(), uxlex::UxlexError>(())
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::catalog::{Domain, Stack};
pub use core::config::Config;
pub use core::error::{Result, UxlexError};
pub use core::services::Services;
pub use core::types::*;
