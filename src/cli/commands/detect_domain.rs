//! Detect-domain command - show which domain a query routes to

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::search::keyword_scores;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the detect-domain command
#[derive(Args, Debug)]
pub struct DetectDomainArgs {
    /// Query to route
    pub query: String,
}

/// Routing decision with the keyword hits behind it
#[derive(Debug, Serialize)]
pub struct DetectDomainOutput {
    pub query: String,
    pub domain: String,
    pub scores: Vec<DomainScore>,
}

#[derive(Debug, Serialize)]
pub struct DomainScore {
    pub domain: String,
    pub hits: usize,
}

/// Execute the detect-domain command
pub async fn execute(
    args: DetectDomainArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let domain = services.search.route(&args.query);
    let scores = keyword_scores(&args.query)
        .into_iter()
        .filter(|(_, hits)| *hits > 0)
        .map(|(domain, hits)| DomainScore {
            domain: domain.to_string(),
            hits,
        })
        .collect();

    let output = DetectDomainOutput {
        query: args.query,
        domain: domain.to_string(),
        scores,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::domain(&output.domain));
            for score in &output.scores {
                println!(
                    "  {} {}",
                    colors::dim(&format!("{}:", score.domain)),
                    colors::number(&score.hits.to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
