//! Average Directional Index (ADX) with +DI and -DI.
//!
//! # Algorithm
//!
//! 1. Directional movement per bar (from bar 1 on):
//!    `up = high[i] - high[i-1]`, `down = low[i-1] - low[i]`;
//!    `+DM = up` if `up > down && up > 0`, else 0 (mirrored for `-DM`)
//! 2. Wilder running totals of `+DM`, `-DM` and true range, seeded by the sum
//!    of the first `period` values (bars `1..=period`)
//! 3. `+DI = 100 * sum(+DM) / sum(TR)`, `-DI` likewise
//! 4. `DX = 100 * |+DI - -DI| / (+DI + -DI)`
//! 5. ADX is seeded by the mean of the first `period` DX values and then
//!    Wilder-averaged
//!
//! # Warm-up
//!
//! `+DI`/`-DI` are defined from index `period`; ADX from `2 * period - 1`.
//!
//! # Zero denominators
//!
//! A zero smoothed true range gives `DI = 0`; a zero DI sum gives `DX = 0`.

use crate::error::Result;
use crate::indicators::atr::true_range_bar;
use crate::kernels::{WilderAverage, WilderSum};
use crate::traits::{validate_aligned, validate_period, SeriesElement};
use crate::utils::undefined;

/// Output of [`adx`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdxOutput<T> {
    /// Average Directional Index.
    pub adx: Vec<T>,
    /// Positive directional indicator.
    pub plus_di: Vec<T>,
    /// Negative directional indicator.
    pub minus_di: Vec<T>,
}

/// Number of leading undefined slots of +DI and -DI.
#[inline]
#[must_use]
pub const fn di_lookback(period: usize) -> usize {
    period
}

/// Number of leading undefined slots of ADX.
#[inline]
#[must_use]
pub const fn adx_lookback(period: usize) -> usize {
    period.saturating_mul(2).saturating_sub(1)
}

/// Directional movement `(+DM, -DM)` between two consecutive bars.
#[inline]
#[must_use]
pub fn directional_movement<T: SeriesElement>(
    prev_high: T,
    prev_low: T,
    high: T,
    low: T,
) -> (T, T) {
    let up = high - prev_high;
    let down = prev_low - low;
    let plus = if up > down && up > T::zero() { up } else { T::zero() };
    let minus = if down > up && down > T::zero() { down } else { T::zero() };
    (plus, minus)
}

#[inline]
fn directional_index<T: SeriesElement>(dm_sum: T, tr_sum: T) -> T {
    if tr_sum == T::zero() {
        T::zero()
    } else {
        T::hundred() * dm_sum / tr_sum
    }
}

#[inline]
fn directional_spread<T: SeriesElement>(plus_di: T, minus_di: T) -> T {
    let total = plus_di + minus_di;
    if total == T::zero() {
        T::zero()
    } else {
        T::hundred() * (plus_di - minus_di).abs() / total
    }
}

/// Computes ADX, +DI and -DI.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The columns have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use chart_ta::indicators::adx;
///
/// let high: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 2.0).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
/// let out = adx(&high, &low, &close, 14).unwrap();
///
/// // a steady climb has no downward movement at all
/// assert_eq!(out.minus_di[20], 0.0);
/// assert!((out.adx[27] - 100.0).abs() < 1e-9);
/// ```
pub fn adx<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<AdxOutput<T>> {
    validate_period(period)?;
    let n = validate_aligned(&[("high", high), ("low", low), ("close", close)])?;

    let mut out = AdxOutput {
        adx: undefined(n),
        plus_di: undefined(n),
        minus_di: undefined(n),
    };
    if n <= period {
        return Ok(out);
    }

    // Slot i - 1 holds the movement from bar i - 1 to bar i.
    let mut plus_dm = Vec::with_capacity(n - 1);
    let mut minus_dm = Vec::with_capacity(n - 1);
    let mut tr = Vec::with_capacity(n - 1);
    for i in 1..n {
        let (p, m) = directional_movement(high[i - 1], low[i - 1], high[i], low[i]);
        plus_dm.push(p);
        minus_dm.push(m);
        tr.push(true_range_bar(high[i], low[i], close[i - 1]));
    }

    let mut plus_sum = WilderSum::seed(&plus_dm[..period])?;
    let mut minus_sum = WilderSum::seed(&minus_dm[..period])?;
    let mut tr_sum = WilderSum::seed(&tr[..period])?;

    let mut dx = Vec::with_capacity(n - period);
    for i in period..n {
        if i > period {
            plus_sum = plus_sum.next(plus_dm[i - 1]);
            minus_sum = minus_sum.next(minus_dm[i - 1]);
            tr_sum = tr_sum.next(tr[i - 1]);
        }
        let plus_di = directional_index(plus_sum.value(), tr_sum.value());
        let minus_di = directional_index(minus_sum.value(), tr_sum.value());
        out.plus_di[i] = plus_di;
        out.minus_di[i] = minus_di;
        dx.push(directional_spread(plus_di, minus_di));
    }

    // dx[j] belongs to bar period + j.
    if dx.len() < period {
        return Ok(out);
    }
    let mut smoothed = WilderAverage::seed(&dx[..period])?;
    let first = adx_lookback(period);
    out.adx[first] = smoothed.value();
    for (j, &value) in dx.iter().enumerate().skip(period) {
        smoothed = smoothed.next(value);
        out.adx[period + j] = smoothed.value();
    }

    Ok(out)
}
