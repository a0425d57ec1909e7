//! Pattern event records.
//!
//! Every detector pass produces immutable records that refer back to the
//! analysed series by bar index and key. [`PatternEvent`] unifies them so the
//! engine can return one ordered event list.

use serde::{Deserialize, Serialize};

/// Confidence attached to a candlestick pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Shape meets the base thresholds.
    Medium,
    /// Shape clears the stronger thresholds as well.
    High,
}

/// Strength bucket of a supply/demand zone, by the size of the move it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Move of at most 3%.
    Weak,
    /// Move above 3% and at most 5%.
    Moderate,
    /// Move above 5%.
    Strong,
}

impl Strength {
    /// Buckets a move given in percent.
    #[must_use]
    pub fn from_move_percent(percent: f64) -> Self {
        if percent > 5.0 {
            Self::Strong
        } else if percent > 3.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Direction of a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Price gapped up.
    Bullish,
    /// Price gapped down.
    Bearish,
}

/// Candlestick pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlestickKind {
    /// Bearish bar followed by a larger bullish bar containing its body.
    BullishEngulfing,
    /// Bullish bar followed by a larger bearish bar containing its body.
    BearishEngulfing,
    /// Small body on top of a long lower wick.
    Hammer,
    /// Small body under a long upper wick.
    ShootingStar,
    /// Open and close nearly equal relative to the range.
    Doji,
}

/// A detected candlestick pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlestickPattern {
    /// Bar index of the pattern (the later bar for two-bar patterns).
    pub index: usize,
    /// Key of that bar.
    pub time: i64,
    /// Pattern kind.
    pub kind: CandlestickKind,
    /// Close of the pattern bar.
    pub price: f64,
    /// Confidence bucket.
    pub confidence: Confidence,
}

/// A three-bar fair value gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueGap {
    /// Index of the middle bar.
    pub index: usize,
    /// Key of the middle bar.
    pub time: i64,
    /// Upper edge of the unfilled range.
    pub gap_top: f64,
    /// Lower edge of the unfilled range.
    pub gap_bottom: f64,
    /// Gap direction.
    pub direction: Direction,
}

/// Kind of a supply/demand zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Origin of an upward move.
    Demand,
    /// Origin of a downward move.
    Supply,
}

/// A bar identified as the origin of a significant move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyDemandZone {
    /// Index of the origin bar.
    pub index: usize,
    /// Key of the origin bar.
    pub time: i64,
    /// Origin bar high.
    pub zone_top: f64,
    /// Origin bar low.
    pub zone_bottom: f64,
    /// Demand or supply.
    pub kind: ZoneKind,
    /// Strength bucket of the move.
    pub strength: Strength,
    /// Largest move in the lookahead window, in percent of the origin close.
    pub move_percent: f64,
}

/// Divergence classification.
///
/// Only the regular kinds are produced by the detector. The hidden kinds are
/// part of the vocabulary so downstream consumers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceKind {
    /// Price lower low, indicator higher low.
    RegularBullish,
    /// Price higher high, indicator lower high.
    RegularBearish,
    /// Price higher low, indicator lower low.
    HiddenBullish,
    /// Price lower high, indicator higher high.
    HiddenBearish,
}

/// Indicator a divergence is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceSource {
    /// Relative Strength Index.
    #[default]
    Rsi,
    /// MACD line.
    Macd,
}

impl DivergenceSource {
    /// Lower-case name of the source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rsi => "rsi",
            Self::Macd => "macd",
        }
    }
}

/// A divergence between two price swings and the indicator swings near them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    /// Index of the first price swing.
    pub start_index: usize,
    /// Index of the second price swing.
    pub end_index: usize,
    /// Key of the first price swing.
    pub start_time: i64,
    /// Key of the second price swing.
    pub end_time: i64,
    /// Classification.
    pub kind: DivergenceKind,
    /// Indicator compared against price.
    pub source: DivergenceSource,
    /// Close at the first price swing.
    pub price_start: f64,
    /// Close at the second price swing.
    pub price_end: f64,
    /// Indicator value at the first matching indicator swing.
    pub indicator_start: f64,
    /// Indicator value at the last matching indicator swing.
    pub indicator_end: f64,
}

/// Any event emitted by the pattern detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PatternEvent {
    /// Candlestick pattern.
    Candlestick(CandlestickPattern),
    /// Fair value gap.
    FairValueGap(FairValueGap),
    /// Supply or demand zone.
    Zone(SupplyDemandZone),
    /// Indicator divergence.
    Divergence(Divergence),
}

impl PatternEvent {
    /// Bar index the event is anchored at.
    ///
    /// A divergence is anchored at its second price swing, where it becomes
    /// observable.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Candlestick(p) => p.index,
            Self::FairValueGap(g) => g.index,
            Self::Zone(z) => z.index,
            Self::Divergence(d) => d.end_index,
        }
    }

    /// Key of the anchor bar.
    #[must_use]
    pub const fn time(&self) -> i64 {
        match self {
            Self::Candlestick(p) => p.time,
            Self::FairValueGap(g) => g.time,
            Self::Zone(z) => z.time,
            Self::Divergence(d) => d.end_time,
        }
    }
}

impl From<CandlestickPattern> for PatternEvent {
    fn from(p: CandlestickPattern) -> Self {
        Self::Candlestick(p)
    }
}

impl From<FairValueGap> for PatternEvent {
    fn from(g: FairValueGap) -> Self {
        Self::FairValueGap(g)
    }
}

impl From<SupplyDemandZone> for PatternEvent {
    fn from(z: SupplyDemandZone) -> Self {
        Self::Zone(z)
    }
}

impl From<Divergence> for PatternEvent {
    fn from(d: Divergence) -> Self {
        Self::Divergence(d)
    }
}
