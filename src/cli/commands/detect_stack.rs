//! Detect-stack command - guess a project's technology stack

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::stack_detect::detect_tech_stack;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the detect-stack command
#[derive(Args, Debug)]
pub struct DetectStackArgs {
    /// Project directory (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct DetectStackOutput {
    pub dir: String,
    pub stack: String,
}

/// Execute the detect-stack command
pub async fn execute(
    args: DetectStackArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stack = detect_tech_stack(&args.dir)?;

    let output = DetectStackOutput {
        dir: args.dir.display().to_string(),
        stack: stack.to_string(),
    };

    match format {
        OutputFormat::Human => println!("{}", colors::domain(&output.stack)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
