//! Suspendable producer of random values.

use oddstop_core::rng::RandomSource;
use tracing::{debug, trace};

use super::parity::{MAX_VALUE, MIN_VALUE, in_range, is_odd};

/// Producer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProducerState {
    /// Created but never resumed.
    Created,
    /// Suspended right after yielding a value.
    Suspended(u32),
    /// Sequence complete; holds the last yielded value.
    Finished(u32),
}

/// A producer that yields random values in `[1, 256]`, one per resumption,
/// and ends its sequence after the first odd value.
///
/// The odd value is itself yielded; the resumption that follows it reports
/// exhaustion.
#[derive(Debug)]
pub struct RandomNumbers<R> {
    source: R,
    pub(crate) state: ProducerState,
}

impl<R: RandomSource> RandomNumbers<R> {
    /// Creates a suspended producer. Nothing is drawn until the first
    /// `advance`.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            source,
            state: ProducerState::Created,
        }
    }

    /// Resumes the producer. Returns `true` if a new value is available
    /// through [`current`](Self::current).
    ///
    /// # Panics
    ///
    /// Panics if the random source yields a value outside `[1, 256]`.
    pub fn advance(&mut self) -> bool {
        match self.state {
            ProducerState::Created => self.draw(),
            ProducerState::Suspended(value) if is_odd(value) => {
                debug!(last = value, "producer finished");
                self.state = ProducerState::Finished(value);
                false
            }
            ProducerState::Suspended(_) => self.draw(),
            ProducerState::Finished(_) => false,
        }
    }

    /// The most recently produced value, or `None` before the first
    /// successful `advance`.
    #[must_use]
    pub fn current(&self) -> Option<u32> {
        match self.state {
            ProducerState::Created => None,
            ProducerState::Suspended(value) | ProducerState::Finished(value) => Some(value),
        }
    }

    /// Whether the sequence has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ProducerState::Finished(_))
    }

    fn draw(&mut self) -> bool {
        let value = self.source.next_u32_range(MIN_VALUE, MAX_VALUE);
        assert!(
            in_range(value),
            "random source yielded {value}, outside [{MIN_VALUE}, {MAX_VALUE}]"
        );
        trace!(value, "produced value");
        self.state = ProducerState::Suspended(value);
        true
    }
}

impl<R: RandomSource> Iterator for RandomNumbers<R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }
}
