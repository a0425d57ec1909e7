//! Anchored Volume Weighted Average Price (VWAP).
//!
//! ```text
//! VWAP[i] = sum(TP[0..=i] * volume[0..=i]) / sum(volume[0..=i])
//! ```
//!
//! Accumulation runs from the first bar of the series with no session reset.
//! While the cumulative volume is zero the slot is NaN.

use crate::error::Result;
use crate::indicators::cci::typical_price;
use crate::traits::{validate_aligned, SeriesElement};

/// VWAP has no warm-up on a series with volume.
#[inline]
#[must_use]
pub const fn vwap_lookback() -> usize {
    0
}

/// Computes the anchored VWAP.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the columns differ in length.
///
/// # Example
///
/// ```
/// use chart_ta::indicators::vwap;
///
/// let high = vec![12.0_f64, 14.0];
/// let low = vec![8.0_f64, 10.0];
/// let close = vec![10.0_f64, 12.0];
/// let volume = vec![100.0_f64, 300.0];
/// let out = vwap(&high, &low, &close, &volume).unwrap();
///
/// assert_eq!(out[0], 10.0);
/// assert!((out[1] - 11.5).abs() < 1e-10);
/// ```
pub fn vwap<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Vec<T>> {
    validate_aligned(&[("high", high), ("low", low), ("close", close), ("volume", volume)])?;
    let tp = typical_price(high, low, close)?;

    let mut weighted = T::zero();
    let mut total = T::zero();
    Ok(tp
        .iter()
        .zip(volume)
        .map(|(&price, &vol)| {
            weighted = weighted + price * vol;
            total = total + vol;
            if total == T::zero() {
                T::nan()
            } else {
                weighted / total
            }
        })
        .collect())
}
