//! WeatherFan CLI entry point
//!
//! Parses flags, loads config, picks the runtime flavor, runs the batch,
//! and prints the report.

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use weatherfan::capitals::capitals;
use weatherfan::cli::Cli;
use weatherfan::config::Config;
use weatherfan::fetch::{Fetcher, OpenMeteoClient};
use weatherfan::report;
use weatherfan::runner::Runner;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet.
    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr; the report owns stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    info!(
        concurrency = config.runner.concurrency,
        timeout_ms = config.runner.timeout_ms,
        single_thread = cli.single_thread,
        "WeatherFan starting"
    );

    // Runtime flavor is an explicit startup parameter, not a hidden global
    // toggle: single-thread mode still fans out, on one OS thread.
    let runtime = if cli.single_thread {
        debug!("main: building current-thread runtime");
        tokio::runtime::Builder::new_current_thread().enable_all().build()
    } else {
        debug!("main: building multi-thread runtime");
        tokio::runtime::Builder::new_multi_thread().enable_all().build()
    }
    .context("Failed to build tokio runtime")?;

    runtime.block_on(run(&config))
}

/// Fetch every capital and print the report
async fn run(config: &Config) -> Result<()> {
    debug!("run: called");
    let fetcher: Arc<dyn Fetcher> = Arc::new(
        OpenMeteoClient::from_config(&config.fetch, config.units).context("Failed to build weather API client")?,
    );

    let cities = capitals();
    let runner = Runner::new(config.runner.clone());
    let outcomes = runner.run(cities, fetcher).await.context("Invalid runner configuration")?;

    print!("{}", report::render(outcomes));
    Ok(())
}
