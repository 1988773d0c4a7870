//! Oddstop console demo — configuration and run wiring.

use std::io::Write;

use oddstop_core::rng::{RandomSource, StdRandomSource};
use oddstop_generator::application::driver::{DriveReport, Driver};
use oddstop_generator::domain::producer::RandomNumbers;

pub mod config;
pub mod error;

use config::DemoConfig;
use error::AppError;

/// Runs the demo with the random source selected by `config`.
///
/// # Errors
///
/// Returns `AppError::Domain` if writing to `out` fails.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DriveReport, AppError> {
    let source = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            StdRandomSource::seeded(seed)
        }
        None => StdRandomSource::from_os_rng(),
    };
    run_with_source(source, out)
}

/// Runs the demo against an arbitrary random source.
///
/// # Errors
///
/// Returns `AppError::Domain` if writing to `out` fails.
pub fn run_with_source<R: RandomSource, W: Write>(
    source: R,
    out: &mut W,
) -> Result<DriveReport, AppError> {
    let report = Driver::new(RandomNumbers::new(source)).run(out)?;
    Ok(report)
}
