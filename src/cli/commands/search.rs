//! Search command - search a design-knowledge domain

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (English, Thai, Chinese or Japanese keywords)
    pub query: String,

    /// Domain to search; detected from the query when omitted
    #[arg(long, short = 'd')]
    pub domain: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let routed = args.domain.is_none();

    let request = SearchRequest {
        query: args.query,
        domain: args.domain,
        max_results: args.max_results,
    };

    let response = services.search.search(request)?;

    if routed && format == OutputFormat::Human {
        println!(
            "{}",
            colors::dim(&format!("Detected domain: {}", response.domain))
        );
    }

    output::print_search_response(&response, format)
}
