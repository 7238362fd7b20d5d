//! Presentation layer for ceprace
//!
//! CLI argument definitions and output formatting. Turning a race outcome
//! into user-facing text (or an exit code) happens here, never in the core.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
