//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for ceprace
#[derive(Parser, Debug)]
#[command(name = "ceprace")]
#[command(version, about = "Race multiple CEP providers and print whichever answers first")]
#[command(long_about = r#"
ceprace resolves a Brazilian CEP (postal code) by querying every configured
provider at the same time and keeping whichever valid answer arrives first.
Slower providers are cancelled; if nobody answers before the deadline the
lookup ends with a timeout (exit code 2).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./ceprace.toml      Project-level config
3. ~/.config/ceprace/config.toml   Global config

Example:
  ceprace 01153-000
  ceprace --deadline-ms 500 01153000
  ceprace -p viacep -o json 01001000
"#)]
pub struct Cli {
    /// The CEP to look up, with or without separator (e.g. 01153-000)
    pub zip_code: Option<String>,

    /// Restrict the race to these providers (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub provider: Vec<String>,

    /// Overall deadline in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    pub deadline_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except the result
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::parse_from(["ceprace", "01153-000"]);
        assert_eq!(cli.zip_code.as_deref(), Some("01153-000"));
        assert!(cli.provider.is_empty());
        assert!(cli.deadline_ms.is_none());
    }

    #[test]
    fn test_parse_provider_filter_and_deadline() {
        let cli = Cli::parse_from([
            "ceprace",
            "-p",
            "viacep",
            "-p",
            "brasilapi",
            "--deadline-ms",
            "500",
            "01153000",
        ]);
        assert_eq!(cli.provider, vec!["viacep", "brasilapi"]);
        assert_eq!(cli.deadline_ms, Some(500));
    }

    #[test]
    fn test_show_config_needs_no_zip_code() {
        let cli = Cli::parse_from(["ceprace", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.zip_code.is_none());
    }
}
