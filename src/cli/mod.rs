//! CLI adapter for uxlex
//!
//! Provides a command-line interface to the design-knowledge search core.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (search logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// uxlex - UI/UX design knowledge search
///
/// Searches curated CSV corpora of styles, palettes, typography, charts,
/// components and per-stack guidelines with BM25 ranking. Queries may mix
/// English with Thai, Chinese or Japanese keywords and tolerate typos.
#[derive(Parser, Debug)]
#[command(name = "uxlex")]
#[command(version)]
#[command(about = "BM25 search over UI/UX design knowledge", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a design domain (style, color, typography, ...)
    Search(commands::SearchArgs),

    /// Search implementation guidelines for a tech stack
    #[command(name = "search-stack")]
    SearchStack(commands::SearchStackArgs),

    /// Show which domain a query would be routed to
    #[command(name = "detect-domain")]
    DetectDomain(commands::DetectDomainArgs),

    /// Detect the tech stack of a project directory
    #[command(name = "detect-stack")]
    DetectStack(commands::DetectStackArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  uxlex completions bash > ~/.local/share/bash-completion/completions/uxlex
    ///   zsh:   uxlex completions zsh > ~/.zfunc/_uxlex
    ///   fish:  uxlex completions fish > ~/.config/fish/completions/uxlex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Commands that don't need services
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::DetectStack(args) => {
            return commands::detect_stack::execute(args, cli.format).await
        }
        _ => {}
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    if !config.data.dir.is_dir() {
        output::print_warning(&format!(
            "Data directory {} does not exist; set UXLEX_DATA_DIR or [data] dir",
            config.data.dir.display()
        ));
    }

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::SearchStack(args) => {
            commands::search_stack::execute(args, &services, cli.format).await
        }
        Commands::DetectDomain(args) => {
            commands::detect_domain::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::DetectStack(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
