//! Core data types for uxlex.
//!
//! Rows come from the corpus source, records go back to callers. Both
//! keep their fields in a stable order so output mirrors the declared
//! column order of a domain.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tabular source row: field name to value, in header order
pub type Row = IndexMap<String, String>;

/// A projected search result: output field name to value
pub type Record = IndexMap<String, String>;

/// Request to search a domain corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query (any language the translation table covers)
    pub query: String,

    /// Domain key; routed from the query when absent
    #[serde(default)]
    pub domain: Option<String>,

    /// Number of results to return (optional)
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Request to search a stack guideline corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackSearchRequest {
    /// Free-text query
    pub query: String,

    /// Stack key (e.g. `react`, `html-tailwind`)
    pub stack: String,

    /// Number of results to return (optional)
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Domain searched (`stack` for stack searches)
    pub domain: String,

    /// Stack searched, for stack searches only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,

    /// Original query string
    pub query: String,

    /// Source identity of the corpus (relative CSV path)
    pub file: String,

    /// Number of results returned
    pub count: usize,

    /// Projected rows, best first
    pub results: Vec<Record>,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}
