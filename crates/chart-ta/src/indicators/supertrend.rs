//! Supertrend indicator.
//!
//! An ATR channel around the bar midpoint whose bands only ratchet toward
//! price, plus a trend flag that flips when the close crosses the band on the
//! opposite side.
//!
//! # Formula
//!
//! ```text
//! hl2        = (high + low) / 2
//! basicUpper = hl2 + m * ATR(p)
//! basicLower = hl2 - m * ATR(p)
//!
//! finalUpper = basicUpper if basicUpper < prevUpper or prevClose > prevUpper else prevUpper
//! finalLower = basicLower if basicLower > prevLower or prevClose < prevLower else prevLower
//! ```
//!
//! A bullish trend turns bearish when `close <= finalLower`; a bearish trend
//! turns bullish when `close >= finalUpper`. The reported value is the lower
//! band while bullish and the upper band while bearish.
//!
//! Slots before the ATR is defined hold NaN and report bullish, which is also
//! the trend assumed going into the first defined bar.

use crate::error::Result;
use crate::indicators::atr::{atr, atr_lookback};
use crate::traits::{validate_aligned, validate_period, validate_positive, SeriesElement};
use crate::utils::undefined;

/// Output of [`supertrend`].
#[derive(Debug, Clone, PartialEq)]
pub struct SupertrendOutput<T> {
    /// Active band: lower while bullish, upper while bearish.
    pub value: Vec<T>,
    /// Trend flag per bar.
    pub bullish: Vec<bool>,
}

/// Number of leading undefined slots of `Supertrend(period, _)`.
#[inline]
#[must_use]
pub const fn supertrend_lookback(period: usize) -> usize {
    atr_lookback(period)
}

/// Final bands and trend carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupertrendState<T> {
    /// Final upper band.
    pub upper: T,
    /// Final lower band.
    pub lower: T,
    /// Trend after the bar.
    pub bullish: bool,
}

impl<T: SeriesElement> SupertrendState<T> {
    /// State of the first defined bar: raw bands, trend resolved against a
    /// bullish prior.
    #[must_use]
    pub fn start(basic_upper: T, basic_lower: T, close: T) -> Self {
        Self {
            upper: basic_upper,
            lower: basic_lower,
            bullish: close > basic_lower,
        }
    }

    /// Ratchets the bands with a new bar and re-evaluates the trend.
    #[must_use]
    pub fn next(self, basic_upper: T, basic_lower: T, prev_close: T, close: T) -> Self {
        let upper = if basic_upper < self.upper || prev_close > self.upper {
            basic_upper
        } else {
            self.upper
        };
        let lower = if basic_lower > self.lower || prev_close < self.lower {
            basic_lower
        } else {
            self.lower
        };
        let bullish = if self.bullish {
            close > lower
        } else {
            close >= upper
        };
        Self { upper, lower, bullish }
    }

    /// The band the trend currently follows.
    #[inline]
    #[must_use]
    pub fn value(&self) -> T {
        if self.bullish {
            self.lower
        } else {
            self.upper
        }
    }
}

/// Computes the Supertrend value and trend flag.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The multiplier is not finite and positive (`Error::InvalidParameter`)
/// - The columns have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::supertrend;
///
/// let high: Vec<f64> = (0..30).map(|i| 101.0 + i as f64).collect();
/// let low: Vec<f64> = (0..30).map(|i| 99.0 + i as f64).collect();
/// let close: Vec<f64> = (0..30).map(|i| 100.5 + i as f64).collect();
/// let out = supertrend(&high, &low, &close, 10, 3.0).unwrap();
///
/// assert!(out.value[9].is_nan());
/// assert!(out.bullish[29]);
/// assert!(out.value[29] < close[29]);
/// ```
pub fn supertrend<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    multiplier: f64,
) -> Result<SupertrendOutput<T>> {
    validate_period(period)?;
    validate_positive(multiplier, "supertrend_multiplier")?;
    let n = validate_aligned(&[("high", high), ("low", low), ("close", close)])?;

    let mut out = SupertrendOutput {
        value: undefined(n),
        bullish: vec![true; n],
    };
    let range = atr(high, low, close, period)?;
    let m = T::from_f64(multiplier)?;
    let two = T::two();

    let mut state: Option<SupertrendState<T>> = None;
    for i in supertrend_lookback(period)..n {
        let hl2 = (high[i] + low[i]) / two;
        let basic_upper = hl2 + m * range[i];
        let basic_lower = hl2 - m * range[i];
        let next = match state {
            None => SupertrendState::start(basic_upper, basic_lower, close[i]),
            Some(prev) => prev.next(basic_upper, basic_lower, close[i - 1], close[i]),
        };
        out.value[i] = next.value();
        out.bullish[i] = next.bullish;
        state = Some(next);
    }

    Ok(out)
}
