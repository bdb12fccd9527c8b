//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to prevent
//! sensitive data (like API keys) from leaking into logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes sensitive information from log messages.
///
/// Upstream error bodies occasionally echo credentials back; this scans for
/// provider API keys (`sk-` prefixed) and bearer authorization values and
/// replaces them with a redaction placeholder before the text reaches a log
/// sink.
///
/// # Arguments
///
/// * `input` - The raw string that may contain sensitive data.
///
/// # Returns
///
/// A new string where all detected secrets have been replaced.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Pattern 1: provider API keys, "sk-" prefixed
    while let Some(pos) = result.find("sk-") {
        let start = pos;
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    // Pattern 2: bearer authorization values
    if let Some(pos) = result.find("Bearer ") {
        let start = pos + "Bearer ".len();
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        if start < end {
            result.replace_range(start..end, "[REDACTED_TOKEN]");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "upstream rejected key sk-abc123def456 for this request";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-abc123def456"));
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let input = "Authorization: Bearer tok_123456789";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_TOKEN]"));
        assert!(!output.contains("tok_123456789"));
    }

    #[test]
    fn test_sanitize_leaves_plain_text_alone() {
        let input = "model deepseek-vision is unavailable";
        assert_eq!(sanitize(input), input);
    }
}
