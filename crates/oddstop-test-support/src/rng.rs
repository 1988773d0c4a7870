//! Test RNG — deterministic `RandomSource` implementations for tests.

use oddstop_core::rng::RandomSource;

/// An RNG that always returns the same value, ignoring the requested range.
/// Useful for forcing a parity outcome on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub u32);

impl RandomSource for FixedRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.0
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable draws
/// (e.g., "4, 4, 4, 7" to force three even values and a stop).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = *self
            .values
            .get(self.index)
            .unwrap_or_else(|| panic!("SequenceRng exhausted after {} draws", self.index));
        self.index += 1;
        val
    }
}
