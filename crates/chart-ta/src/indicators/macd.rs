//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! # Formula
//!
//! ```text
//! MACD      = EMA(close, fast) - EMA(close, slow)
//! Signal    = EMA(MACD, signal), seeded by the mean of the first `signal` MACD values
//! Histogram = MACD - Signal
//! ```
//!
//! The MACD line is defined once both EMAs are, at `max(fast, slow) - 1`.
//! The signal line and histogram follow `signal - 1` slots later.

use crate::error::Result;
use crate::indicators::ema::{ema, ema_from};
use crate::traits::{validate_period, SeriesElement};

/// Output of [`macd`]: three columns aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// Fast EMA minus slow EMA.
    pub macd: Vec<T>,
    /// EMA of the MACD line.
    pub signal: Vec<T>,
    /// MACD minus signal.
    pub histogram: Vec<T>,
}

/// Number of leading undefined slots of the MACD line.
#[inline]
#[must_use]
pub const fn macd_line_lookback(fast: usize, slow: usize) -> usize {
    let longest = if fast > slow { fast } else { slow };
    longest.saturating_sub(1)
}

/// Number of leading undefined slots of the signal line and histogram.
#[inline]
#[must_use]
pub const fn macd_signal_lookback(fast: usize, slow: usize, signal: usize) -> usize {
    macd_line_lookback(fast, slow).saturating_add(signal.saturating_sub(1))
}

/// Computes MACD, signal and histogram columns.
///
/// Short series produce all-NaN columns.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any of the three periods is zero.
///
/// # Example
///
/// ```
/// use chart_ta::indicators::macd;
///
/// let data: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
/// let out = macd(&data, 12, 26, 9).unwrap();
///
/// assert!(out.macd[24].is_nan());
/// assert!(!out.macd[25].is_nan());
/// assert!(out.signal[32].is_nan());
/// assert!(!out.signal[33].is_nan());
/// ```
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput<T>> {
    validate_period(fast)?;
    validate_period(slow)?;
    validate_period(signal)?;

    let fast_ema = ema(data, fast)?;
    let slow_ema = ema(data, slow)?;
    let line: Vec<T> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(&f, &s)| f - s)
        .collect();

    let signal_line = ema_from(&line, macd_line_lookback(fast, slow), signal)?;
    let histogram = line
        .iter()
        .zip(&signal_line)
        .map(|(&m, &s)| m - s)
        .collect();

    Ok(MacdOutput {
        macd: line,
        signal: signal_line,
        histogram,
    })
}
