//! Oddstop Core — shared abstractions.
//!
//! This crate defines the random source seam and the error type that the
//! generator context depends on. It contains no console or process code.

pub mod error;
pub mod rng;
