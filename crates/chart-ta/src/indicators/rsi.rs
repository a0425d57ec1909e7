//! Relative Strength Index (RSI) indicator.
//!
//! The RSI is a momentum oscillator bounded to `[0, 100]` that compares the
//! size of recent gains to recent losses.
//!
//! # Algorithm
//!
//! 1. Split consecutive close deltas into gains and losses (losses stored positive)
//! 2. Seed average gain/loss with the simple mean of the first `period` deltas
//! 3. Carry both averages forward with Wilder smoothing
//! 4. `RS = avgGain / avgLoss`, `RSI = 100 - 100 / (1 + RS)`
//!
//! The running averages are carried explicitly in an [`RsiState`] rather than
//! recovered from the previous RSI output.
//!
//! # Boundary Conditions
//!
//! - `avgLoss == 0` (all gains, or no movement at all): RSI = 100
//! - `avgGain == 0` with losses: RSI = 0
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::rsi;
//!
//! let data = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5];
//! let result = rsi(&data, 5).unwrap();
//!
//! assert!(result[4].is_nan());
//! assert!(result[5] >= 0.0 && result[5] <= 100.0);
//! ```

use crate::error::Result;
use crate::kernels::WilderAverage;
use crate::traits::{validate_period, SeriesElement};
use crate::utils::undefined;

/// Number of leading undefined slots of `RSI(period)`.
///
/// The first value needs `period` deltas, i.e. `period + 1` closes.
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Running state of the RSI recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiState<T> {
    /// Wilder-smoothed average gain.
    pub avg_gain: WilderAverage<T>,
    /// Wilder-smoothed average loss (positive).
    pub avg_loss: WilderAverage<T>,
}

impl<T: SeriesElement> RsiState<T> {
    /// Folds one close-to-close delta into the state.
    #[inline]
    #[must_use]
    pub fn next(self, delta: T) -> Self {
        let (gain, loss) = split_delta(delta);
        Self {
            avg_gain: self.avg_gain.next(gain),
            avg_loss: self.avg_loss.next(loss),
        }
    }

    /// RSI value implied by the current averages.
    #[inline]
    #[must_use]
    pub fn value(&self) -> T {
        rsi_value(self.avg_gain.value(), self.avg_loss.value())
    }
}

#[inline]
fn split_delta<T: SeriesElement>(delta: T) -> (T, T) {
    if delta > T::zero() {
        (delta, T::zero())
    } else if delta < T::zero() {
        (T::zero(), -delta)
    } else {
        (T::zero(), T::zero())
    }
}

#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    let hundred = T::hundred();
    if avg_loss == T::zero() {
        hundred
    } else if avg_gain == T::zero() {
        T::zero()
    } else {
        let rs = avg_gain / avg_loss;
        hundred - hundred / (T::one() + rs)
    }
}

/// Computes the Relative Strength Index using Wilder's smoothing.
///
/// The first `period` slots are NaN. Fewer than `period + 1` closes yield an
/// all-NaN vector.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut result = undefined(data.len());
    if data.len() <= period {
        return Ok(result);
    }

    let (gains, losses): (Vec<T>, Vec<T>) = data
        .windows(2)
        .map(|w| split_delta(w[1] - w[0]))
        .unzip();

    let mut state = RsiState {
        avg_gain: WilderAverage::seed(&gains[..period])?,
        avg_loss: WilderAverage::seed(&losses[..period])?,
    };
    result[period] = state.value();

    for i in (period + 1)..data.len() {
        state = state.next(data[i] - data[i - 1]);
        result[i] = state.value();
    }

    Ok(result)
}
