//! Driver loop: pulls values from the producer, buffers them and reports
//! to a writer.
//!
//! The driver re-checks parity on every value it emits and stops pulling on
//! the first odd one, independently of the producer's own termination.

use std::collections::VecDeque;
use std::io::Write;

use oddstop_core::error::DomainError;
use oddstop_core::rng::RandomSource;
use tracing::{debug, info, instrument};

use crate::domain::parity::{MAX_VALUE, MIN_VALUE, is_odd};
use crate::domain::producer::RandomNumbers;

/// Driver phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    AwaitingValue,
    Emitting(u32),
    Draining,
    Done,
}

/// Why the driver stopped pulling values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The driver saw an odd value and stopped on its own.
    StoppedByController(u32),
    /// The producer reported no further values.
    ProducerExhausted,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveReport {
    /// Values in emission order.
    pub produced: Vec<u32>,
    /// Values in the order they left the buffer.
    pub drained: Vec<u32>,
    /// Why collection ended.
    pub stop: StopReason,
}

/// Owns a producer and the FIFO buffer its values are collected into.
#[derive(Debug)]
pub struct Driver<R> {
    producer: RandomNumbers<R>,
    queue: VecDeque<u32>,
}

impl<R: RandomSource> Driver<R> {
    /// Creates a driver over a fresh producer.
    #[must_use]
    pub fn new(producer: RandomNumbers<R>) -> Self {
        Self {
            producer,
            queue: VecDeque::new(),
        }
    }

    /// Runs the producer to the first odd value, then drains the buffer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Output` if writing to `out` fails.
    #[instrument(skip_all)]
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<DriveReport, DomainError> {
        writeln!(
            out,
            "Demo: Random number generator [{MIN_VALUE}..{MAX_VALUE}]"
        )?;
        writeln!(out, "The coroutine stops when an odd number is generated.")?;
        writeln!(out)?;

        let mut produced = Vec::new();
        let mut drained = Vec::new();
        let mut stop = StopReason::ProducerExhausted;
        let mut state = DriverState::AwaitingValue;

        loop {
            state = match state {
                DriverState::AwaitingValue => match self.next_value() {
                    Some(value) => DriverState::Emitting(value),
                    None => DriverState::Draining,
                },
                DriverState::Emitting(value) => {
                    self.queue.push_back(value);
                    produced.push(value);
                    writeln!(out, "Generated: {value}")?;
                    debug!(value, buffered = self.queue.len(), "emitted value");

                    if is_odd(value) {
                        writeln!(out)?;
                        writeln!(
                            out,
                            "Odd number detected → Coroutine stopped by controller."
                        )?;
                        info!(value, "controller stopped the producer");
                        stop = StopReason::StoppedByController(value);
                        DriverState::Draining
                    } else {
                        DriverState::AwaitingValue
                    }
                }
                DriverState::Draining => {
                    writeln!(out)?;
                    writeln!(out, "Queue contents:")?;
                    while let Some(value) = self.queue.pop_front() {
                        write!(out, "{value} ")?;
                        drained.push(value);
                    }
                    writeln!(out)?;
                    info!(count = drained.len(), "buffer drained");
                    DriverState::Done
                }
                DriverState::Done => break,
            };
        }

        out.flush()?;

        Ok(DriveReport {
            produced,
            drained,
            stop,
        })
    }

    fn next_value(&mut self) -> Option<u32> {
        if self.producer.advance() {
            self.producer.current()
        } else {
            None
        }
    }
}
