//! Wilder smoothing state records.
//!
//! RSI, ATR and ADX all carry a small running state through a single pass.
//! The records here hold that state explicitly so each recurrence is a fold
//! over the series: `state = state.next(x)`.
//!
//! # Formulas
//!
//! ```text
//! WilderAverage:  seed = mean(x[0..p]);  avg' = (avg * (p - 1) + x) / p
//! WilderSum:      seed = sum(x[0..p]);   sum' = sum - sum / p + x
//! ```
//!
//! Both are exponential smoothing with weight `1/p`; the sum form is the
//! running total that ADX divides into directional indicators.

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Running Wilder average seeded by a simple mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilderAverage<T> {
    period: T,
    value: T,
}

impl<T: SeriesElement> WilderAverage<T> {
    /// Seeds the average with the simple mean of `window`.
    ///
    /// The smoothing period is the window length.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `window` is empty.
    pub fn seed(window: &[T]) -> Result<Self> {
        validate_period(window.len())?;
        let period = T::from_usize(window.len())?;
        let sum = window.iter().fold(T::zero(), |acc, &x| acc + x);
        Ok(Self {
            period,
            value: sum / period,
        })
    }

    /// Folds one more observation into the average.
    #[inline]
    #[must_use]
    pub fn next(self, x: T) -> Self {
        Self {
            period: self.period,
            value: (self.value * (self.period - T::one()) + x) / self.period,
        }
    }

    /// Current smoothed value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

/// Running Wilder total seeded by a simple sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilderSum<T> {
    period: T,
    value: T,
}

impl<T: SeriesElement> WilderSum<T> {
    /// Seeds the total with the sum of `window`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `window` is empty.
    pub fn seed(window: &[T]) -> Result<Self> {
        validate_period(window.len())?;
        Ok(Self {
            period: T::from_usize(window.len())?,
            value: window.iter().fold(T::zero(), |acc, &x| acc + x),
        })
    }

    /// Folds one more observation into the total.
    #[inline]
    #[must_use]
    pub fn next(self, x: T) -> Self {
        Self {
            period: self.period,
            value: self.value - self.value / self.period + x,
        }
    }

    /// Current smoothed total.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}
