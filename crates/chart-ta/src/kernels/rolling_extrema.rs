//! Rolling extrema using a monotonic deque.
//!
//! The stochastic oscillator needs the highest high and lowest low of a
//! trailing window at every bar. A monotonic deque answers both in amortized
//! O(1) per bar, so the full pass is O(n) regardless of window size.
//!
//! # Algorithm
//!
//! The deque stores indices whose values are monotonically ordered
//! (non-increasing for a maximum, non-decreasing for a minimum):
//!
//! 1. Pop from the back every index whose value the new value dominates
//! 2. Push the new index
//! 3. Pop from the front every index that has left the window
//!
//! The front is then the window's extremum.

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};
use crate::utils::undefined;

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// A monotonic deque of indices for one rolling extremum.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
    kind: Extremum,
}

impl MonotonicDeque {
    /// Creates an empty deque for a window of `period` elements.
    #[must_use]
    pub fn new(period: usize, kind: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            kind,
        }
    }

    /// Pushes `data[index]` into the window.
    ///
    /// NaN values are never retained as extrema.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                let back_val = data[back];
                let dominated = match self.kind {
                    Extremum::Max => back_val.is_nan() || value >= back_val,
                    Extremum::Min => back_val.is_nan() || value <= back_val,
                };
                if dominated {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while let Some(&front) = self.deque.front() {
                if front < window_start {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }
        }
    }

    /// Returns the index of the current extremum, if the window holds any value.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum, or NaN for an empty window.
    #[inline]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

/// Lookback for a rolling extremum over `period` elements.
#[inline]
#[must_use]
pub const fn rolling_extrema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

fn rolling<T: SeriesElement>(data: &[T], period: usize, kind: Extremum) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut result = undefined(data.len());
    if data.len() < period {
        return Ok(result);
    }
    let mut deque = MonotonicDeque::new(period, kind);
    for i in 0..data.len() {
        deque.push(i, data);
        if i + 1 >= period {
            result[i] = deque.extremum(data);
        }
    }
    Ok(result)
}

/// Computes the rolling maximum over a trailing window of `period` elements.
///
/// The first `period - 1` slots are NaN; a series shorter than `period`
/// yields an all-NaN column.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// # Example
///
/// ```
/// use chart_ta::kernels::rolling_max;
///
/// let out = rolling_max(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
/// assert!(out[1].is_nan());
/// assert_eq!(&out[2..], &[3.0, 5.0, 5.0]);
/// ```
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling(data, period, Extremum::Max)
}

/// Computes the rolling minimum over a trailing window of `period` elements.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling(data, period, Extremum::Min)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    fn naive(data: &[f64], period: usize, kind: Extremum) -> Vec<f64> {
        (0..data.len())
            .map(|i| {
                if i + 1 < period {
                    return f64::NAN;
                }
                let window = &data[i + 1 - period..=i];
                match kind {
                    Extremum::Max => window.iter().cloned().fold(f64::MIN, f64::max),
                    Extremum::Min => window.iter().cloned().fold(f64::MAX, f64::min),
                }
            })
            .collect()
    }

    #[test]
    fn test_rolling_max_matches_naive() {
        let data = vec![5.0, 1.0, 4.0, 4.0, 2.0, 8.0, 7.0, 3.0, 3.0, 9.0, 0.5];
        for period in 1..=5 {
            let fast = rolling_max(&data, period).unwrap();
            let slow = naive(&data, period, Extremum::Max);
            for (a, b) in fast.iter().zip(slow.iter()) {
                assert!((a.is_nan() && b.is_nan()) || a == b);
            }
        }
    }

    #[test]
    fn test_rolling_min_matches_naive() {
        let data = vec![5.0, 1.0, 4.0, 4.0, 2.0, 8.0, 7.0, 3.0, 3.0, 9.0, 0.5];
        for period in 1..=5 {
            let fast = rolling_min(&data, period).unwrap();
            let slow = naive(&data, period, Extremum::Min);
            for (a, b) in fast.iter().zip(slow.iter()) {
                assert!((a.is_nan() && b.is_nan()) || a == b);
            }
        }
    }

    #[test]
    fn test_rolling_short_series_all_nan() {
        let out = rolling_max(&[1.0_f64, 2.0], 5).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_rolling_empty() {
        let out = rolling_min::<f64>(&[], 3).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rolling_zero_period() {
        assert!(matches!(
            rolling_max(&[1.0_f64], 0),
            Err(Error::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_rolling_extrema_lookback() {
        assert_eq!(rolling_extrema_lookback(14), 13);
        assert_eq!(rolling_extrema_lookback(0), 0);
    }

    #[test]
    fn test_rolling_oversized_period() {
        let out = rolling_max(&[1.0_f64, 2.0, 3.0], usize::MAX).unwrap();
        assert!(out.iter().all(|x| x.is_nan()));
    }
}
