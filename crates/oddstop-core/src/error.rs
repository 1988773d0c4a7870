//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Only the console side of a run can fail recoverably. A misbehaving random
/// source is an invariant violation and panics instead.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Writing to the observation channel failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
