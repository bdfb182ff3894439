//! Shared comparison and inspection helpers.

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results of many accumulated operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality within an absolute tolerance.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

/// Approximate equality within a relative tolerance, for values of
/// varying magnitude.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    if max_abs == T::zero() {
        return diff == T::zero();
    }
    diff / max_abs < rel_tolerance
}

/// Length of the undefined prefix of an indicator output.
///
/// Useful for asserting the warm-up length of a windowed indicator.
#[inline]
#[must_use]
pub fn undefined_prefix<T>(values: &[Option<T>]) -> usize {
    values.iter().take_while(|v| v.is_none()).count()
}

/// Number of defined values in an indicator output.
#[inline]
#[must_use]
pub fn defined_count<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}
