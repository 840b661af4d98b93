//! Unified service container for uxlex
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::search::SearchService;
use crate::core::source::CsvSource;
use std::sync::Arc;

/// Unified services container
///
/// The CLI and the MCP server both use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search service; owns the index cache
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, reading corpora from `config.data.dir`
    pub fn new(config: Config) -> Self {
        let source = Arc::new(CsvSource::new(config.data.dir.clone()));
        let search = Arc::new(SearchService::new(source, config.search.clone()));

        Self {
            search,
            config: Arc::new(config),
        }
    }
}
