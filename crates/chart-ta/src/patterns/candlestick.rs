//! Candlestick pattern rules.
//!
//! All rules work on the geometry of one bar ([`CandleShape`]) or two
//! consecutive bars. Thresholds are ratios of the bar's own range or body, so
//! the rules are scale free.
//!
//! | Pattern | Rule | High confidence |
//! |---------|------|-----------------|
//! | Engulfing | opposite colours, current body contains and exceeds the prior body | body > 1.5x prior body |
//! | Hammer | body < 30% of range, lower wick >= 2x body and > 60% of range, upper wick < body | lower wick >= 3x body |
//! | Shooting star | mirror of the hammer on the upper wick | upper wick >= 3x body |
//! | Doji | body < 10% of range | body < 5% of range |
//!
//! Bars with zero range never match a single-bar rule; hammer and shooting
//! star additionally need a non-zero body.

use crate::patterns::event::{CandlestickKind, CandlestickPattern, Confidence};
use crate::series::Bar;

const ENGULFING_HIGH_RATIO: f64 = 1.5;
const WICK_BODY_MIN: f64 = 2.0;
const WICK_BODY_HIGH: f64 = 3.0;
const WICK_RANGE_MIN: f64 = 0.6;
const SMALL_BODY_RATIO: f64 = 0.3;
const DOJI_RATIO: f64 = 0.1;
const DOJI_HIGH_RATIO: f64 = 0.05;

/// Body and wick measurements of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleShape {
    /// `|close - open|`.
    pub body: f64,
    /// `high - max(open, close)`.
    pub upper_wick: f64,
    /// `min(open, close) - low`.
    pub lower_wick: f64,
    /// `high - low`.
    pub range: f64,
}

impl CandleShape {
    /// Measures a bar.
    #[must_use]
    pub fn of(bar: &Bar) -> Self {
        Self {
            body: (bar.close - bar.open).abs(),
            upper_wick: bar.high - bar.open.max(bar.close),
            lower_wick: bar.open.min(bar.close) - bar.low,
            range: bar.high - bar.low,
        }
    }

    /// Body as a fraction of the range.
    #[must_use]
    pub fn body_ratio(&self) -> f64 {
        self.body / self.range
    }
}

fn pattern(index: usize, bar: &Bar, kind: CandlestickKind, high: bool) -> CandlestickPattern {
    CandlestickPattern {
        index,
        time: bar.time,
        kind,
        price: bar.close,
        confidence: if high { Confidence::High } else { Confidence::Medium },
    }
}

/// Classifies a two-bar engulfing pattern, if any.
#[must_use]
pub fn engulfing(prev: &Bar, curr: &Bar) -> Option<(CandlestickKind, Confidence)> {
    let prev_body = (prev.close - prev.open).abs();
    let curr_body = (curr.close - curr.open).abs();
    if curr_body <= prev_body {
        return None;
    }

    let kind = if prev.is_bearish()
        && curr.is_bullish()
        && curr.open <= prev.close
        && curr.close >= prev.open
    {
        CandlestickKind::BullishEngulfing
    } else if prev.is_bullish()
        && curr.is_bearish()
        && curr.open >= prev.close
        && curr.close <= prev.open
    {
        CandlestickKind::BearishEngulfing
    } else {
        return None;
    };

    let confidence = if curr_body > prev_body * ENGULFING_HIGH_RATIO {
        Confidence::High
    } else {
        Confidence::Medium
    };
    Some((kind, confidence))
}

/// Detects bullish and bearish engulfing patterns. Index 0 never matches.
#[must_use]
pub fn detect_engulfing(bars: &[Bar]) -> Vec<CandlestickPattern> {
    bars.windows(2)
        .enumerate()
        .filter_map(|(offset, pair)| {
            engulfing(&pair[0], &pair[1]).map(|(kind, confidence)| CandlestickPattern {
                index: offset + 1,
                time: pair[1].time,
                kind,
                price: pair[1].close,
                confidence,
            })
        })
        .collect()
}

/// Long-wick test shared by the hammer and the shooting star.
///
/// Returns `Some(high_confidence)` when `wick` is the dominant wick and
/// `other` the short one.
fn long_wick(shape: &CandleShape, wick: f64, other: f64) -> Option<bool> {
    if shape.body <= 0.0 || shape.range <= 0.0 {
        return None;
    }
    let matches = wick >= shape.body * WICK_BODY_MIN
        && shape.body_ratio() < SMALL_BODY_RATIO
        && wick / shape.range > WICK_RANGE_MIN
        && other < shape.body;
    matches.then_some(wick >= shape.body * WICK_BODY_HIGH)
}

/// Detects hammers: a small body above a long lower wick.
#[must_use]
pub fn detect_hammer(bars: &[Bar]) -> Vec<CandlestickPattern> {
    bars.iter()
        .enumerate()
        .filter_map(|(i, bar)| {
            let shape = CandleShape::of(bar);
            long_wick(&shape, shape.lower_wick, shape.upper_wick)
                .map(|high| pattern(i, bar, CandlestickKind::Hammer, high))
        })
        .collect()
}

/// Detects shooting stars: a small body below a long upper wick.
#[must_use]
pub fn detect_shooting_star(bars: &[Bar]) -> Vec<CandlestickPattern> {
    bars.iter()
        .enumerate()
        .filter_map(|(i, bar)| {
            let shape = CandleShape::of(bar);
            long_wick(&shape, shape.upper_wick, shape.lower_wick)
                .map(|high| pattern(i, bar, CandlestickKind::ShootingStar, high))
        })
        .collect()
}

/// Detects doji bars.
#[must_use]
pub fn detect_doji(bars: &[Bar]) -> Vec<CandlestickPattern> {
    bars.iter()
        .enumerate()
        .filter_map(|(i, bar)| {
            let shape = CandleShape::of(bar);
            if shape.range <= 0.0 {
                return None;
            }
            let ratio = shape.body_ratio();
            (ratio < DOJI_RATIO)
                .then(|| pattern(i, bar, CandlestickKind::Doji, ratio < DOJI_HIGH_RATIO))
        })
        .collect()
}
