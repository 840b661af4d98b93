//! Search orchestration.
//!
//! [`SearchService`] wires the query pipeline, the index cache and the
//! scorer together for one request at a time. It is `Send + Sync` and is
//! shared by every adapter through [`Services`](crate::core::Services).

use crate::core::catalog::{CorpusDescriptor, Domain, Stack};
use crate::core::config::SearchConfig;
use crate::core::error::{Result, UxlexError};
use crate::core::index::IndexCache;
use crate::core::query::{correct, QueryNormalizer};
use crate::core::search::bm25::rank;
use crate::core::search::router::route;
use crate::core::source::CorpusSource;
use crate::core::types::{Record, Row, SearchRequest, SearchResponse, StackSearchRequest};
use std::sync::Arc;
use std::time::Instant;

/// Domain and stack search over a corpus source
pub struct SearchService {
    source: Arc<dyn CorpusSource>,
    cache: Arc<IndexCache>,
    normalizer: QueryNormalizer<'static>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a service with its own empty cache
    pub fn new(source: Arc<dyn CorpusSource>, config: SearchConfig) -> Self {
        Self::with_cache(source, config, Arc::new(IndexCache::new()))
    }

    /// Create a service over an existing cache
    pub fn with_cache(
        source: Arc<dyn CorpusSource>,
        config: SearchConfig,
        cache: Arc<IndexCache>,
    ) -> Self {
        Self {
            source,
            cache,
            normalizer: QueryNormalizer::builtin(config.use_synonyms),
            config,
        }
    }

    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Domain the router would pick for `query`
    pub fn route(&self, query: &str) -> Domain {
        route(query)
    }

    /// Search a domain, routing from the query when no domain is given
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let domain = match request.domain.as_deref() {
            Some(key) => key.parse::<Domain>()?,
            None => self.route(&request.query),
        };
        self.search_domain(&request.query, domain, request.max_results)
    }

    /// Search one domain's corpus
    pub fn search_domain(
        &self,
        query: &str,
        domain: Domain,
        max_results: Option<usize>,
    ) -> Result<SearchResponse> {
        let start = Instant::now();
        let descriptor = domain.descriptor();
        let results = self.search_corpus(query, &descriptor, max_results)?;

        Ok(SearchResponse {
            domain: domain.to_string(),
            stack: None,
            query: query.to_string(),
            file: descriptor.file.to_string(),
            count: results.len(),
            results,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Search a stack's guideline corpus
    pub fn search_stack(&self, request: StackSearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();
        let stack: Stack = request.stack.parse()?;
        let descriptor = stack.descriptor();
        let results = self.search_corpus(&request.query, &descriptor, request.max_results)?;

        Ok(SearchResponse {
            domain: "stack".to_string(),
            stack: Some(stack.to_string()),
            query: request.query,
            file: descriptor.file.to_string(),
            count: results.len(),
            results,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Rank the rows of one corpus against `query` and project the best.
    ///
    /// A missing corpus is [`UxlexError::SourceNotFound`] and leaves the
    /// cache untouched. A query with no usable tokens, or one that scores
    /// zero everywhere, yields no records.
    pub fn search_corpus(
        &self,
        query: &str,
        descriptor: &CorpusDescriptor,
        max_results: Option<usize>,
    ) -> Result<Vec<Record>> {
        let limit = self.result_limit(max_results)?;
        self.validate_query(query)?;

        let identity = descriptor.file;
        let Some(modified) = self.source.modified(identity)? else {
            tracing::warn!(identity, "Corpus source not found");
            return Err(UxlexError::SourceNotFound(identity.to_string()));
        };

        let entry = self
            .cache
            .get_or_build(identity, modified, descriptor.search_fields, || {
                self.source.load_rows(identity)
            })?;

        let mut tokens = self.normalizer.normalize(query);
        if self.config.use_fuzzy {
            tokens = correct(&tokens, &entry.index, self.config.fuzzy_threshold);
        }
        tracing::debug!(identity, ?tokens, "Normalized query");

        let records: Vec<Record> = rank(&entry.index, &tokens, self.config.bm25_params())
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .take(limit)
            .filter_map(|(doc, _)| entry.rows.get(doc))
            .map(|row| project(row, descriptor.output_fields))
            .collect();

        tracing::debug!(identity, results = records.len(), "Search complete");
        Ok(records)
    }

    fn result_limit(&self, max_results: Option<usize>) -> Result<usize> {
        let limit = max_results
            .unwrap_or(self.config.default_max_results)
            .min(self.config.max_results_cap);
        if limit == 0 {
            return Err(UxlexError::InvalidQuery(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(limit)
    }

    fn validate_query(&self, query: &str) -> Result<()> {
        let len = query.chars().count();
        if len > self.config.max_query_length {
            return Err(UxlexError::InvalidQuery(format!(
                "Query is {len} characters, maximum is {}",
                self.config.max_query_length
            )));
        }
        Ok(())
    }
}

/// Keep only `fields` of `row`, in `fields` order. Missing fields are omitted.
fn project(row: &Row, fields: &[&str]) -> Record {
    fields
        .iter()
        .filter_map(|field| row.get(*field).map(|value| (field.to_string(), value.clone())))
        .collect()
}
