//! Corpus indexing and the index cache.

mod cache;
mod corpus;

pub use cache::{CacheEntry, IndexCache};
pub use corpus::CorpusIndex;
