//! Value range and the parity termination condition.

/// Smallest value the producer can yield.
pub const MIN_VALUE: u32 = 1;

/// Largest value the producer can yield.
pub const MAX_VALUE: u32 = 256;

/// Returns `true` when `value` ends a sequence.
#[must_use]
pub fn is_odd(value: u32) -> bool {
    value % 2 == 1
}

/// Returns `true` when `value` lies in `[MIN_VALUE, MAX_VALUE]`.
#[must_use]
pub fn in_range(value: u32) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}
