//! CLI entrypoint for ceprace
//!
//! Wires the layers together: parses arguments, loads configuration,
//! builds the HTTP providers, and runs the lookup race.

use anyhow::{Result, anyhow, bail};
use ceprace_application::{RaceLookupInput, RaceLookupUseCase};
use ceprace_domain::ZipCode;
use ceprace_infrastructure::{ConfigLoader, build_providers};
use ceprace_presentation::{Cli, ConsoleFormatter, OutputFormat};
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit code when no provider answered before the deadline
const EXIT_TIMEOUT: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    let zip_code = match cli.zip_code {
        Some(raw) => ZipCode::try_new(&raw)?,
        None => bail!("A CEP is required (e.g. ceprace 01153-000)"),
    };

    let deadline = Duration::from_millis(cli.deadline_ms.unwrap_or(config.race.deadline_ms));

    // === Dependency Injection ===
    let client = reqwest::Client::builder()
        .user_agent(concat!("ceprace/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut providers = build_providers(&config.providers, &client);
    if !cli.provider.is_empty() {
        providers.retain(|p| {
            cli.provider
                .iter()
                .any(|name| name.eq_ignore_ascii_case(p.name().as_str()))
        });
        if providers.is_empty() {
            bail!(
                "No enabled provider matches {:?} (available: BrasilAPI, ViaCEP)",
                cli.provider
            );
        }
    }

    info!("Resolved configuration: {} providers, deadline {} ms", providers.len(), deadline.as_millis());

    // Progress goes to stderr so `--output json` stays pipeable.
    if !cli.quiet {
        eprintln!(
            "{}",
            ConsoleFormatter::format_banner(providers.len(), &zip_code)
        );
    }

    let use_case = RaceLookupUseCase::new(providers);
    let input = RaceLookupInput::new(zip_code).with_deadline(deadline);
    let outcome = use_case.execute(input).await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };

    println!("{}", output);

    if outcome.is_timeout() {
        std::process::exit(EXIT_TIMEOUT);
    }

    Ok(())
}
