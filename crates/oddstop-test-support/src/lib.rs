//! Shared test mocks and utilities for the oddstop generator demo.

mod rng;

pub use rng::{FixedRng, SequenceRng};
