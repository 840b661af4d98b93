//! uxlex CLI - command-line search over UI/UX design knowledge
//!
//! # Examples
//!
//! ```bash
//! # Search, letting the query pick the domain
//! uxlex search "glassmorphism dark dashboard"
//!
//! # Search a specific domain
//! uxlex search "fintech trust" --domain color -n 5
//!
//! # Stack guidelines
//! uxlex search-stack "image optimization" --stack nextjs
//!
//! # Which stack is this project?
//! uxlex detect-stack ./my-app
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uxlex::cli::output::print_error;
use uxlex::cli::{run, Cli};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("uxlex=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
