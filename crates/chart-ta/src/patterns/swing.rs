//! Swing point extraction.
//!
//! Index `i` is a swing high when its value is strictly greater than every
//! value within `window` slots on both sides, and a swing low when strictly
//! smaller. Ties and plateaus never qualify, and neither do slots whose value
//! (or any neighbour's) is NaN. Only indices with a full window on both sides
//! are examined.

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Swing highs and lows of a series, each in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwingPoints {
    /// Indices of swing highs.
    pub highs: Vec<usize>,
    /// Indices of swing lows.
    pub lows: Vec<usize>,
}

/// Finds swing highs and lows using a symmetric window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `window` is zero.
///
/// # Example
///
/// ```
/// use chart_ta::patterns::find_swings;
///
/// let data = vec![1.0_f64, 3.0, 1.0, 0.0, 2.0, 2.0, 1.0];
/// let swings = find_swings(&data, 1).unwrap();
///
/// assert_eq!(swings.highs, vec![1]);
/// assert_eq!(swings.lows, vec![3]);
/// ```
pub fn find_swings<T: SeriesElement>(data: &[T], window: usize) -> Result<SwingPoints> {
    validate_period(window)?;
    let mut swings = SwingPoints::default();
    if data.len() <= window.saturating_mul(2) {
        return Ok(swings);
    }

    for i in window..data.len() - window {
        let center = data[i];
        let neighbours = (1..=window).flat_map(|j| [data[i - j], data[i + j]]);
        let mut is_high = true;
        let mut is_low = true;
        for other in neighbours {
            is_high &= center > other;
            is_low &= center < other;
            if !is_high && !is_low {
                break;
            }
        }
        if is_high {
            swings.highs.push(i);
        }
        if is_low {
            swings.lows.push(i);
        }
    }

    Ok(swings)
}
