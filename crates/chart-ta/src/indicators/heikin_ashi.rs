//! Heikin-Ashi bar transform.
//!
//! ```text
//! HA[0]    = bar[0]
//! haClose  = (open + high + low + close) / 4
//! haOpen   = (prevHaOpen + prevHaClose) / 2
//! haHigh   = max(high, haOpen, haClose)
//! haLow    = min(low, haOpen, haClose)
//! ```
//!
//! The output keeps each bar's key and volume, so it is a drop-in
//! [`BarSeries`] for every indicator and detector.

use crate::series::{Bar, BarSeries};

/// Transforms raw bars into Heikin-Ashi bars of the same length and order.
///
/// # Example
///
/// ```
/// use chart_ta::indicators::heikin_ashi;
/// use chart_ta::Bar;
///
/// let bars = vec![
///     Bar::new(1, 10.0, 12.0, 9.0, 11.0, 100.0),
///     Bar::new(2, 11.0, 13.0, 10.0, 12.0, 100.0),
/// ];
/// let ha = heikin_ashi(&bars);
///
/// assert_eq!(ha[0], bars[0]);
/// assert_eq!(ha[1].open, 10.5);
/// assert_eq!(ha[1].close, 11.5);
/// ```
#[must_use]
pub fn heikin_ashi(bars: &[Bar]) -> Vec<Bar> {
    let mut out: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars {
        let next = match out.last() {
            None => *bar,
            Some(prev) => {
                let close = (bar.open + bar.high + bar.low + bar.close) / 4.0;
                let open = (prev.open + prev.close) / 2.0;
                Bar {
                    open,
                    high: bar.high.max(open).max(close),
                    low: bar.low.min(open).min(close),
                    close,
                    ..*bar
                }
            }
        };
        out.push(next);
    }
    out
}

impl BarSeries {
    /// Heikin-Ashi transform of the whole series.
    #[must_use]
    pub fn heikin_ashi(&self) -> Self {
        Self::new(heikin_ashi(self.bars()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    fn sample(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.6).sin() * 5.0;
                let open = base + (i as f64 * 1.3).cos();
                let close = base - (i as f64 * 0.9).sin();
                let high = open.max(close) + 0.5 + (i % 3) as f64 * 0.2;
                let low = open.min(close) - 0.4;
                Bar::new(i as i64, open, high, low, close, 10.0 + i as f64)
            })
            .collect()
    }

    #[test]
    fn test_heikin_ashi_envelope() {
        for ha in heikin_ashi(&sample(200)) {
            assert!(ha.high >= ha.open.max(ha.close));
            assert!(ha.low <= ha.open.min(ha.close));
        }
    }

    #[test]
    fn test_heikin_ashi_keeps_keys_and_volume() {
        let bars = sample(20);
        let ha = heikin_ashi(&bars);
        assert_eq!(ha.len(), bars.len());
        for (raw, transformed) in bars.iter().zip(&ha) {
            assert_eq!(raw.time, transformed.time);
            assert_eq!(raw.volume, transformed.volume);
        }
    }

    #[test]
    fn test_heikin_ashi_open_chains_previous_bar() {
        let ha = heikin_ashi(&sample(10));
        for i in 1..10 {
            assert_eq!(ha[i].open, (ha[i - 1].open + ha[i - 1].close) / 2.0);
        }
    }

    #[test]
    fn test_heikin_ashi_series_method() {
        let series = BarSeries::new(sample(5));
        let ha = series.heikin_ashi();
        assert_eq!(ha.bars(), heikin_ashi(series.bars()).as_slice());
        assert!(BarSeries::default().heikin_ashi().is_empty());
    }
}
