//! Output formatting for CLI commands.

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One plain value per line.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Print generated values, one per line or as a JSON array.
pub fn print_values(values: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for value in values {
                println!("{}", value);
            }
        }
        OutputFormat::Json => println!("{}", format_json(&values, "[]")),
    }
}

/// Print a single item: `text` as-is, or the item as JSON.
pub fn print_single<T: Serialize>(data: &T, text: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}
