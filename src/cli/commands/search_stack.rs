//! Search-stack command - search a stack's implementation guidelines

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::StackSearchRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search-stack command
#[derive(Args, Debug)]
pub struct SearchStackArgs {
    /// Search query
    pub query: String,

    /// Stack to search (e.g. react, nextjs, html-tailwind)
    #[arg(long, short = 's')]
    pub stack: String,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,
}

/// Execute the search-stack command
pub async fn execute(
    args: SearchStackArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = StackSearchRequest {
        query: args.query,
        stack: args.stack,
        max_results: args.max_results,
    };

    let response = services.search.search_stack(request)?;
    output::print_search_response(&response, format)
}
