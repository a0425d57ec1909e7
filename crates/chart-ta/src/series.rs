//! Bar series model.
//!
//! A [`BarSeries`] is an immutable, chronologically ascending sequence of
//! OHLCV [`Bar`]s. The engine never rejects a series: OHLC consistency is the
//! caller's responsibility, and [`BarSeries::inspect`] only reports problems.

use serde::{Deserialize, Serialize};

/// One OHLCV sample for a fixed time period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Ordered, unique key of the bar (epoch time or sequence number).
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Creates a bar from its key and OHLCV values.
    #[must_use]
    pub const fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// `(high + low + close) / 3`, used by CCI and VWAP.
    #[inline]
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Close above open.
    #[inline]
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Close below open.
    #[inline]
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Column-major view of a series, as consumed by the indicator routines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    /// Opening prices.
    pub open: Vec<f64>,
    /// Highs.
    pub high: Vec<f64>,
    /// Lows.
    pub low: Vec<f64>,
    /// Closes.
    pub close: Vec<f64>,
    /// Volumes.
    pub volume: Vec<f64>,
}

/// A data-quality finding reported by [`BarSeries::inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Finding {
    /// A price or the volume is NaN or infinite.
    NonFinite(usize),
    /// High/low do not bracket open and close.
    InvalidOhlc(usize),
    /// A price is below zero.
    NegativePrice(usize),
    /// Volume is below zero.
    NegativeVolume(usize),
    /// The key is not strictly greater than the previous bar's key.
    NonAscendingTime(usize),
}

impl Finding {
    /// Index of the bar the finding refers to.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            Self::NonFinite(i)
            | Self::InvalidOhlc(i)
            | Self::NegativePrice(i)
            | Self::NegativeVolume(i)
            | Self::NonAscendingTime(i) => i,
        }
    }
}

/// An ordered, immutable sequence of bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Wraps bars that are already in ascending key order.
    #[must_use]
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True if the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The bars as a slice.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The bar at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Closing prices.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Splits the series into aligned OHLCV columns.
    #[must_use]
    pub fn columns(&self) -> Columns {
        let n = self.bars.len();
        let mut cols = Columns {
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        };
        for bar in &self.bars {
            cols.open.push(bar.open);
            cols.high.push(bar.high);
            cols.low.push(bar.low);
            cols.close.push(bar.close);
            cols.volume.push(bar.volume);
        }
        cols
    }

    /// Reports data-quality problems without altering the series.
    ///
    /// At most one finding of each kind is reported per bar, in the order
    /// non-finite, invalid OHLC, negative price, negative volume, key order.
    #[must_use]
    pub fn inspect(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (i, bar) in self.bars.iter().enumerate() {
            let prices = [bar.open, bar.high, bar.low, bar.close];
            if prices.iter().any(|p| !p.is_finite()) || !bar.volume.is_finite() {
                findings.push(Finding::NonFinite(i));
            } else {
                let body_top = bar.open.max(bar.close);
                let body_bottom = bar.open.min(bar.close);
                if bar.high < bar.low || bar.high < body_top || bar.low > body_bottom {
                    findings.push(Finding::InvalidOhlc(i));
                }
                if prices.iter().any(|&p| p < 0.0) {
                    findings.push(Finding::NegativePrice(i));
                }
                if bar.volume < 0.0 {
                    findings.push(Finding::NegativeVolume(i));
                }
            }
            if i > 0 && bar.time <= self.bars[i - 1].time {
                findings.push(Finding::NonAscendingTime(i));
            }
        }
        findings
    }
}

impl From<Vec<Bar>> for BarSeries {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}

impl FromIterator<Bar> for BarSeries {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
