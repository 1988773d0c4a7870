//! Oddstop console demo — application error types.

use oddstop_core::error::DomainError;
use thiserror::Error;

/// Runtime errors for the console demo.
#[derive(Debug, Error)]
pub enum AppError {
    /// The run itself failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
