//! Oddstop console demo entry point.

use std::error::Error;

use oddstop_cli::config::DemoConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries only the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting oddstop demo");

    let stdout = std::io::stdout();
    let report = oddstop_cli::run(&config, &mut stdout.lock())?;

    tracing::info!(produced = report.produced.len(), stop = ?report.stop, "demo finished");

    Ok(())
}
