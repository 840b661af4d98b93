//! Search module: BM25 ranking, domain routing and the orchestrating
//! search service.

mod bm25;
mod router;
mod service;

pub use bm25::{rank, Bm25Params};
pub use router::{keyword_scores, route};
pub use service::SearchService;
