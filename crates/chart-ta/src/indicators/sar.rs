//! Parabolic SAR (Stop and Reverse).
//!
//! A trailing stop that accelerates toward price while a trend extends.
//!
//! # Formula
//!
//! ```text
//! uptrend:    SAR' = SAR + AF * (EP - SAR)
//! downtrend:  SAR' = SAR - AF * (SAR - EP)
//! ```
//!
//! `EP` is the extreme point of the current trend (highest high in an uptrend,
//! lowest low in a downtrend). `AF` starts at `accel`, grows by `accel` on every
//! new extreme and is capped at `max`. When a bar pierces the advanced SAR the
//! trend flips: the SAR jumps to the old `EP`, `EP` becomes the bar's opposite
//! extreme and `AF` resets.
//!
//! # Alignment
//!
//! The recurrence starts in an uptrend with `SAR = low[0]`, `EP = high[0]`.
//! Slot 0 is undefined; slot `i` holds the SAR carried into bar `i`, before
//! bar `i` advances the state.

use crate::error::{Error, Result};
use crate::traits::{validate_aligned, validate_positive, SeriesElement};
use crate::utils::undefined;

/// Number of leading undefined slots of the SAR column.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    1
}

/// Running state of the Parabolic SAR recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SarState<T> {
    /// True while the trend is up.
    pub uptrend: bool,
    /// Current stop level.
    pub sar: T,
    /// Extreme point of the current trend.
    pub ep: T,
    /// Current acceleration factor.
    pub af: T,
}

impl<T: SeriesElement> SarState<T> {
    /// Initial state for a series whose first bar is `(high, low)`.
    #[must_use]
    pub fn start(high: T, low: T, accel: T) -> Self {
        Self {
            uptrend: true,
            sar: low,
            ep: high,
            af: accel,
        }
    }

    /// Advances the state through one bar.
    #[must_use]
    pub fn next(self, high: T, low: T, accel: T, max: T) -> Self {
        let Self { uptrend, sar, ep, af } = self;
        if uptrend {
            let advanced = sar + af * (ep - sar);
            if low < advanced {
                Self { uptrend: false, sar: ep, ep: low, af: accel }
            } else if high > ep {
                Self { uptrend, sar: advanced, ep: high, af: (af + accel).min(max) }
            } else {
                Self { uptrend, sar: advanced, ep, af }
            }
        } else {
            let advanced = sar - af * (sar - ep);
            if high > advanced {
                Self { uptrend: true, sar: ep, ep: high, af: accel }
            } else if low < ep {
                Self { uptrend, sar: advanced, ep: low, af: (af + accel).min(max) }
            } else {
                Self { uptrend, sar: advanced, ep, af }
            }
        }
    }
}

/// Validates the SAR acceleration settings: `0 < accel <= max`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` for a non-positive or non-finite value,
/// or when `accel` exceeds `max`.
pub fn validate_sar_params(accel: f64, max: f64) -> Result<()> {
    validate_positive(accel, "sar_accel")?;
    validate_positive(max, "sar_max")?;
    if accel > max {
        return Err(Error::InvalidParameter {
            name: "sar_accel",
            reason: "must not exceed sar_max",
        });
    }
    Ok(())
}

/// Computes the Parabolic SAR.
///
/// # Errors
///
/// Returns an error if:
/// - The acceleration settings are invalid (`Error::InvalidParameter`)
/// - `high` and `low` have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::sar;
///
/// let high = vec![10.0_f64, 11.0, 12.0];
/// let low = vec![9.0_f64, 10.0, 11.0];
/// let out = sar(&high, &low, 0.02, 0.2).unwrap();
///
/// assert!(out[0].is_nan());
/// assert_eq!(out[1], 9.0);
/// assert!((out[2] - 9.02).abs() < 1e-10);
/// ```
pub fn sar<T: SeriesElement>(high: &[T], low: &[T], accel: f64, max: f64) -> Result<Vec<T>> {
    validate_sar_params(accel, max)?;
    let n = validate_aligned(&[("high", high), ("low", low)])?;
    let mut result = undefined(n);
    if n == 0 {
        return Ok(result);
    }

    let accel = T::from_f64(accel)?;
    let max = T::from_f64(max)?;
    let mut state = SarState::start(high[0], low[0], accel);
    for i in 1..n {
        result[i] = state.sar;
        state = state.next(high[i], low[i], accel, max);
    }

    Ok(result)
}
