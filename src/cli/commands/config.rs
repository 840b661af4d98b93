//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::catalog::{Domain, Stack};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list every corpus file and whether it is present
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub data_dir: String,
    pub search: SearchSettings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub corpora: Vec<CorpusStatus>,
}

#[derive(Debug, Serialize)]
pub struct SearchSettings {
    pub default_max_results: usize,
    pub max_results_cap: usize,
    pub max_query_length: usize,
    pub k1: f64,
    pub b: f64,
    pub fuzzy_threshold: usize,
    pub use_synonyms: bool,
    pub use_fuzzy: bool,
}

#[derive(Debug, Serialize)]
pub struct CorpusStatus {
    pub name: String,
    pub file: String,
    pub present: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;
    let data_dir = &config.data.dir;

    let corpora = if args.all {
        let domains = Domain::ALL
            .iter()
            .map(|d| (d.to_string(), d.descriptor().file));
        let stacks = Stack::ALL
            .iter()
            .map(|s| (format!("stack:{s}"), s.descriptor().file));
        domains
            .chain(stacks)
            .map(|(name, file)| CorpusStatus {
                name,
                file: file.to_string(),
                present: data_dir.join(file).is_file(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let search = &config.search;
    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().display().to_string(),
        data_dir: data_dir.display().to_string(),
        search: SearchSettings {
            default_max_results: search.default_max_results,
            max_results_cap: search.max_results_cap,
            max_query_length: search.max_query_length,
            k1: search.k1,
            b: search.b,
            fuzzy_threshold: search.fuzzy_threshold,
            use_synonyms: search.use_synonyms,
            use_fuzzy: search.use_fuzzy,
        },
        corpora,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  data_dir: {}", colors::file_path(&response.data_dir));
            println!("  search:");
            println!(
                "    default_max_results: {}",
                response.search.default_max_results
            );
            println!("    max_results_cap: {}", response.search.max_results_cap);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("    k1: {}", response.search.k1);
            println!("    b: {}", response.search.b);
            println!("    fuzzy_threshold: {}", response.search.fuzzy_threshold);
            println!("    use_synonyms: {}", response.search.use_synonyms);
            println!("    use_fuzzy: {}", response.search.use_fuzzy);
            if !response.corpora.is_empty() {
                println!("  corpora:");
                for corpus in &response.corpora {
                    let status = if corpus.present {
                        colors::success("present")
                    } else {
                        colors::warning("missing")
                    };
                    println!("    {} {} {}", corpus.name, colors::dim(&corpus.file), status);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
