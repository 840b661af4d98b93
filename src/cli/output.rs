//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::types::{Record, SearchResponse};

/// Longest field value shown in human output before truncation
pub const MAX_FIELD_CHARS: usize = 160;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for domain and stack names
    pub fn domain(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for corpus file names
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Format a duration in milliseconds
pub fn format_duration_ms(ms: u64) -> String {
    if ms >= 1000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{ms}ms")
    }
}

/// Print one ranked record as indented `field: value` lines
pub fn print_record(rank: usize, record: &Record) {
    let mut fields = record.iter().filter(|(_, value)| !value.trim().is_empty());

    // The first non-empty field names the row
    let title = fields.next();
    match title {
        Some((_, value)) => println!(
            "[{}] {}",
            colors::rank(&rank.to_string()),
            colors::label(&truncate(value, MAX_FIELD_CHARS))
        ),
        None => println!("[{}]", colors::rank(&rank.to_string())),
    }

    for (field, value) in fields {
        println!(
            "    {}: {}",
            colors::dim(field),
            truncate(value, MAX_FIELD_CHARS)
        );
    }
    println!();
}

/// Print a search response in the requested format
pub fn print_search_response(
    response: &SearchResponse,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let scope = match &response.stack {
                Some(stack) => format!("stack '{}'", colors::domain(stack)),
                None => format!("domain '{}'", colors::domain(&response.domain)),
            };

            if response.results.is_empty() {
                println!(
                    "No results found for '{}' in {}",
                    colors::label(&response.query),
                    scope
                );
            } else {
                println!(
                    "Found {} result(s) in {} {} {}\n",
                    colors::number(&response.count.to_string()),
                    scope,
                    colors::file_path(&response.file),
                    colors::dim(&format!("({})", format_duration_ms(response.duration_ms)))
                );
                for (i, record) in response.results.iter().enumerate() {
                    print_record(i + 1, record);
                }
            }
        }
        OutputFormat::Json => print_output(response, format),
    }
    Ok(())
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
