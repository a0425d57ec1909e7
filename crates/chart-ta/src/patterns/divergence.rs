//! Regular divergence between price and an indicator.
//!
//! # Algorithm
//!
//! 1. Find swing points on the closes and on the indicator column
//! 2. For each consecutive pair of price swing lows `(p1, p2)` with
//!    `p2 - p1 <= lookback`, collect the indicator swing lows inside
//!    `[p1 - tolerance, p2 + tolerance]`
//! 3. With at least two of them, compare the first (`q1`) and last (`q2`):
//!    a lower low in price with a higher low in the indicator is a regular
//!    bullish divergence
//! 4. Swing highs mirror this: a higher high in price with a lower high in the
//!    indicator is a regular bearish divergence
//!
//! Hidden divergences are not classified.

use crate::error::Result;
use crate::patterns::event::{Divergence, DivergenceKind, DivergenceSource};
use crate::patterns::swing::find_swings;
use crate::series::Bar;
use crate::traits::{validate_aligned, validate_period};

/// Tunables of the divergence pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivergenceSettings {
    /// Half-width of the swing window.
    pub swing_window: usize,
    /// Largest index distance between paired price swings.
    pub lookback: usize,
    /// Slack, in bars, when matching indicator swings to a price-swing span.
    pub tolerance: usize,
}

impl Default for DivergenceSettings {
    fn default() -> Self {
        Self {
            swing_window: 5,
            lookback: 50,
            tolerance: 3,
        }
    }
}

/// Which side of the swing structure a pass looks at.
#[derive(Clone, Copy)]
enum Side {
    Lows,
    Highs,
}

/// Detects regular divergences between the closes of `bars` and `indicator`.
///
/// Bullish divergences are listed first, then bearish ones, each in order of
/// the price swing pair.
///
/// # Errors
///
/// Returns an error if:
/// - `swing_window` or `lookback` is zero (`Error::InvalidPeriod`)
/// - `indicator` is not aligned with `bars` (`Error::LengthMismatch`)
pub fn detect_divergence(
    bars: &[Bar],
    indicator: &[f64],
    source: DivergenceSource,
    settings: DivergenceSettings,
) -> Result<Vec<Divergence>> {
    validate_period(settings.swing_window)?;
    validate_period(settings.lookback)?;
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    validate_aligned(&[("bars", closes.as_slice()), ("indicator", indicator)])?;

    let price_swings = find_swings(&closes, settings.swing_window)?;
    let indicator_swings = find_swings(indicator, settings.swing_window)?;

    let mut found = Vec::new();
    for side in [Side::Lows, Side::Highs] {
        let (price_points, indicator_points) = match side {
            Side::Lows => (&price_swings.lows, &indicator_swings.lows),
            Side::Highs => (&price_swings.highs, &indicator_swings.highs),
        };

        for pair in price_points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            if p2 - p1 > settings.lookback {
                continue;
            }
            let from = p1.saturating_sub(settings.tolerance);
            let to = p2.saturating_add(settings.tolerance);
            let mut matching = indicator_points
                .iter()
                .copied()
                .filter(|&q| q >= from && q <= to);
            let Some(q1) = matching.next() else {
                continue;
            };
            let Some(q2) = matching.last() else {
                continue;
            };

            let (price_start, price_end) = (closes[p1], closes[p2]);
            let (indicator_start, indicator_end) = (indicator[q1], indicator[q2]);
            let kind = match side {
                Side::Lows if price_end < price_start && indicator_end > indicator_start => {
                    DivergenceKind::RegularBullish
                }
                Side::Highs if price_end > price_start && indicator_end < indicator_start => {
                    DivergenceKind::RegularBearish
                }
                _ => continue,
            };

            found.push(Divergence {
                start_index: p1,
                end_index: p2,
                start_time: bars[p1].time,
                end_time: bars[p2].time,
                kind,
                source,
                price_start,
                price_end,
                indicator_start,
                indicator_end,
            });
        }
    }

    Ok(found)
}
