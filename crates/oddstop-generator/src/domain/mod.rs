//! Producer state machine and the parity rule.

pub mod parity;
pub mod producer;
