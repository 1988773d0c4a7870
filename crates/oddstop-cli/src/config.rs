//! Environment configuration.

/// Name of the optional seed variable.
pub const SEED_VAR: &str = "ODDSTOP_SEED";

/// Process configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Fixed seed for a repeatable run. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(SEED_VAR).ok().as_deref())
    }

    /// Builds configuration from the raw value of `ODDSTOP_SEED`.
    ///
    /// A value that is not a valid `u64` is logged and ignored, leaving the
    /// run seeded from the OS.
    #[must_use]
    pub fn from_seed_var(raw: Option<&str>) -> Self {
        let seed = raw.and_then(|value| match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(
                    value,
                    error = %e,
                    "ignoring invalid {SEED_VAR}, seeding from the OS"
                );
                None
            }
        });
        Self { seed }
    }
}
