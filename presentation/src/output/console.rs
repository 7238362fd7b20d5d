//! Console output formatter for lookup outcomes

use ceprace_domain::{LookupOutcome, ZipCode};
use colored::Colorize;

/// Formats lookup outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-line banner shown while the race is running.
    ///
    /// Callers should print this to stderr so piped output stays parseable.
    pub fn format_banner(provider_count: usize, zip_code: &ZipCode) -> String {
        format!(
            "Racing {} providers for CEP {}...",
            provider_count,
            zip_code.formatted()
        )
    }

    /// Format the outcome as human-readable text
    pub fn format(outcome: &LookupOutcome) -> String {
        match outcome {
            LookupOutcome::Fastest(resolved) => {
                let mut output = String::new();

                output.push_str(&format!(
                    "{} {} ({} ms)\n\n",
                    "Fastest answer:".cyan().bold(),
                    resolved.provider.to_string().yellow().bold(),
                    resolved.latency.as_millis()
                ));

                let address = &resolved.address;
                output.push_str(&format!("  {:<14}{}\n", "CEP:".bold(), address.zip_code));
                output.push_str(&format!("  {:<14}{}\n", "Street:".bold(), address.street));
                output.push_str(&format!(
                    "  {:<14}{}\n",
                    "Neighborhood:".bold(),
                    address.neighborhood
                ));
                output.push_str(&format!("  {:<14}{}\n", "City:".bold(), address.city));
                output.push_str(&format!("  {:<14}{}", "State:".bold(), address.state));

                output
            }
            LookupOutcome::TimedOut => format!(
                "{} no provider answered within the deadline",
                "Timeout:".red().bold()
            ),
        }
    }

    /// Format the outcome as JSON
    pub fn format_json(outcome: &LookupOutcome) -> String {
        let value = match outcome {
            LookupOutcome::Fastest(resolved) => serde_json::json!({
                "outcome": "result",
                "provider": resolved.provider,
                "latency_ms": resolved.latency.as_millis() as u64,
                "address": resolved.address,
            }),
            LookupOutcome::TimedOut => serde_json::json!({
                "outcome": "timeout",
            }),
        };

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
