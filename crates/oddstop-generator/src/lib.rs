//! Oddstop — random value producer and draining driver.
//!
//! The domain layer holds a suspendable producer that draws integers from
//! `[1, 256]` until an odd one ends its sequence. The application layer pulls
//! from it, buffers every value in FIFO order and reports to a writer.

pub mod application;
pub mod domain;
