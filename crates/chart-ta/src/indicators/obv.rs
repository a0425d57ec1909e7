//! On-Balance Volume (OBV).
//!
//! Running volume total signed by the direction of each close.
//!
//! ```text
//! OBV[0] = volume[0]
//! OBV[i] = OBV[i-1] + volume[i]   if close[i] > close[i-1]
//!        = OBV[i-1] - volume[i]   if close[i] < close[i-1]
//!        = OBV[i-1]               otherwise
//! ```
//!
//! Every slot is defined. A flat close (or a NaN comparison) carries the
//! previous total unchanged.

use std::cmp::Ordering;

use crate::error::Result;
use crate::traits::{validate_aligned, SeriesElement};

/// OBV has no warm-up.
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// Computes On-Balance Volume.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `close` and `volume` differ in length.
///
/// # Example
///
/// ```
/// use chart_ta::indicators::obv;
///
/// let close = vec![10.0_f64, 11.0, 10.5, 10.5];
/// let volume = vec![100.0_f64, 50.0, 20.0, 70.0];
/// assert_eq!(obv(&close, &volume).unwrap(), vec![100.0, 150.0, 130.0, 130.0]);
/// ```
pub fn obv<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    let n = validate_aligned(&[("close", close), ("volume", volume)])?;
    let mut result = Vec::with_capacity(n);
    let Some(&first) = volume.first() else {
        return Ok(result);
    };

    let mut total = first;
    result.push(total);
    for i in 1..n {
        total = match close[i].partial_cmp(&close[i - 1]) {
            Some(Ordering::Greater) => total + volume[i],
            Some(Ordering::Less) => total - volume[i],
            _ => total,
        };
        result.push(total);
    }

    Ok(result)
}
