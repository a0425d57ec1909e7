//! Bollinger Bands.
//!
//! # Formula
//!
//! ```text
//! middle = SMA(close, p)
//! upper  = middle + k * sigma
//! lower  = middle - k * sigma
//! ```
//!
//! `sigma` is the population standard deviation of the window (divide by `p`).
//! Each window is measured in two passes (mean, then squared deviations from
//! it), so a constant window has exactly zero width.

use crate::error::Result;
use crate::traits::{validate_period, validate_positive, SeriesElement};
use crate::utils::{mean, undefined};

/// Output of [`bollinger`].
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// Upper band.
    pub upper: Vec<T>,
    /// Middle band (SMA).
    pub middle: Vec<T>,
    /// Lower band.
    pub lower: Vec<T>,
}

/// Number of leading undefined slots of `Bollinger(period)`.
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Population standard deviation of a window around a known mean.
#[inline]
fn population_std<T: SeriesElement>(window: &[T], avg: T) -> Result<T> {
    let n = T::from_usize(window.len())?;
    let sum_sq = window
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - avg) * (x - avg));
    Ok((sum_sq / n).sqrt())
}

/// Computes Bollinger Bands.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - `k` is not finite and positive (`Error::InvalidParameter`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::bollinger;
///
/// let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let out = bollinger(&data, 8, 2.0).unwrap();
///
/// // mean 5, population sigma 2
/// assert!((out.middle[7] - 5.0).abs() < 1e-10);
/// assert!((out.upper[7] - 9.0).abs() < 1e-10);
/// assert!((out.lower[7] - 1.0).abs() < 1e-10);
/// ```
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    period: usize,
    k: f64,
) -> Result<BollingerOutput<T>> {
    validate_period(period)?;
    validate_positive(k, "bollinger_k")?;

    let n = data.len();
    let mut out = BollingerOutput {
        upper: undefined(n),
        middle: undefined(n),
        lower: undefined(n),
    };
    if n < period {
        return Ok(out);
    }

    let k = T::from_f64(k)?;
    for (offset, window) in data.windows(period).enumerate() {
        let i = offset + period - 1;
        let avg = mean(window)?;
        let width = k * population_std(window, avg)?;
        out.middle[i] = avg;
        out.upper[i] = avg + width;
        out.lower[i] = avg - width;
    }

    Ok(out)
}
