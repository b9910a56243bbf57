//! Output formatting utilities

use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Print a vector of rows in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert!(matches!(format, OutputFormat::Text));
    }
}
