//! Fair value gap detection.
//!
//! A fair value gap is a three-bar imbalance: the wicks of the bars on either
//! side of a strong middle bar do not overlap.
//!
//! ```text
//! bullish: bar[i-1].high < bar[i+1].low, bar[i] bullish
//!          gap = [bar[i-1].high, bar[i+1].low], reference = bar[i-1].high
//! bearish: bar[i-1].low > bar[i+1].high, bar[i] bearish
//!          gap = [bar[i+1].high, bar[i-1].low], reference = bar[i-1].low
//! ```
//!
//! A gap is kept when `gap / reference * 100 >= min_gap_percent`. Gaps whose
//! reference price is not positive are skipped.

use crate::error::Result;
use crate::patterns::event::{Direction, FairValueGap};
use crate::series::Bar;
use crate::traits::validate_non_negative;

fn gap_percent(size: f64, reference: f64) -> Option<f64> {
    (reference > 0.0).then(|| size / reference * 100.0)
}

/// Detects fair value gaps. The event index is the middle bar.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `min_gap_percent` is negative or not
/// finite.
///
/// # Example
///
/// ```
/// use chart_ta::patterns::{detect_fair_value_gaps, Direction};
/// use chart_ta::Bar;
///
/// let bars = vec![
///     Bar::new(1, 99.0, 100.0, 98.0, 99.5, 1.0),
///     Bar::new(2, 100.0, 104.0, 99.5, 103.5, 1.0),
///     Bar::new(3, 103.5, 105.0, 103.0, 104.0, 1.0),
/// ];
/// let gaps = detect_fair_value_gaps(&bars, 0.5).unwrap();
///
/// assert_eq!(gaps.len(), 1);
/// assert_eq!(gaps[0].direction, Direction::Bullish);
/// assert_eq!((gaps[0].gap_bottom, gaps[0].gap_top), (100.0, 103.0));
/// ```
pub fn detect_fair_value_gaps(bars: &[Bar], min_gap_percent: f64) -> Result<Vec<FairValueGap>> {
    validate_non_negative(min_gap_percent, "fvg_min_gap_percent")?;

    let mut gaps = Vec::new();
    for (offset, w) in bars.windows(3).enumerate() {
        let (prev, curr, next) = (&w[0], &w[1], &w[2]);
        let index = offset + 1;

        if curr.is_bullish() && prev.high < next.low {
            let big_enough = gap_percent(next.low - prev.high, prev.high)
                .is_some_and(|pct| pct >= min_gap_percent);
            if big_enough {
                gaps.push(FairValueGap {
                    index,
                    time: curr.time,
                    gap_top: next.low,
                    gap_bottom: prev.high,
                    direction: Direction::Bullish,
                });
            }
        }

        if curr.is_bearish() && prev.low > next.high {
            let big_enough = gap_percent(prev.low - next.high, prev.low)
                .is_some_and(|pct| pct >= min_gap_percent);
            if big_enough {
                gaps.push(FairValueGap {
                    index,
                    time: curr.time,
                    gap_top: prev.low,
                    gap_bottom: next.high,
                    direction: Direction::Bearish,
                });
            }
        }
    }

    Ok(gaps)
}
