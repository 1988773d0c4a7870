//! Driver loop that consumes the producer.

pub mod driver;
