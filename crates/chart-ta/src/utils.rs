//! Shared helpers for aligned indicator columns.
//!
//! Undefined slots in every output column are NaN. The helpers here create,
//! inspect and compare such columns.
//!
//! # Example
//!
//! ```
//! use chart_ta::utils::{approx_eq, count_nan_prefix, EPSILON};
//!
//! let column = vec![f64::NAN, f64::NAN, 1.0 / 3.0];
//! assert_eq!(count_nan_prefix(&column), 2);
//! assert!(approx_eq(column[2], 0.333_333_333_333_333, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results of long recurrences.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns a column of `len` undefined slots.
#[inline]
#[must_use]
pub fn undefined<T: SeriesElement>(len: usize) -> Vec<T> {
    vec![T::nan(); len]
}

/// Approximate equality check for floating-point values.
///
/// Two NaN values compare equal, which makes whole-column comparisons
/// including warm-up slots straightforward.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Count the number of NaN values in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// For a series longer than an indicator's warm-up this equals the
/// indicator's lookback.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Arithmetic mean of a non-empty window.
#[inline]
pub(crate) fn mean<T: SeriesElement>(window: &[T]) -> crate::Result<T> {
    let n = T::from_usize(window.len())?;
    Ok(window.iter().fold(T::zero(), |acc, &x| acc + x) / n)
}
