//! Pattern detector passes.
//!
//! Each pass walks a finished bar slice once and returns immutable event
//! records:
//!
//! - [`candlestick`] - engulfing, hammer, shooting star and doji rules
//! - [`gaps`] - three-bar fair value gaps
//! - [`zones`] - supply/demand zones from subsequent price displacement
//! - [`swing`] - strict symmetric-window swing points
//! - [`divergence`] - regular divergence between closes and an indicator
//!
//! Empty or short inputs produce empty event lists.
//!
//! # Example
//!
//! ```
//! use chart_ta::patterns::{detect_doji, detect_engulfing};
//! use chart_ta::Bar;
//!
//! let bars = vec![
//!     Bar::new(1, 11.0, 11.5, 9.5, 10.0, 100.0),
//!     Bar::new(2, 9.8, 12.0, 9.5, 11.5, 100.0),
//! ];
//! assert_eq!(detect_engulfing(&bars).len(), 1);
//! assert!(detect_doji(&bars).is_empty());
//! ```

pub mod candlestick;
pub mod divergence;
pub mod event;
pub mod gaps;
pub mod swing;
pub mod zones;

pub use candlestick::{
    detect_doji, detect_engulfing, detect_hammer, detect_shooting_star, engulfing, CandleShape,
};
pub use divergence::{detect_divergence, DivergenceSettings};
pub use event::{
    CandlestickKind, CandlestickPattern, Confidence, Direction, Divergence, DivergenceKind,
    DivergenceSource, FairValueGap, PatternEvent, Strength, SupplyDemandZone, ZoneKind,
};
pub use gaps::detect_fair_value_gaps;
pub use swing::{find_swings, SwingPoints};
pub use zones::detect_zones;
