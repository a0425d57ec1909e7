//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use chart_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! assert_eq!(rsi_result[9], 100.0);
//! # let _ = (sma_result, ema_result);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`]
//! - series and engine types: [`Bar`], [`BarSeries`], [`Engine`],
//!   [`EngineConfig`], [`Analysis`]
//! - every indicator routine with its output struct
//! - every detector with its event record types

pub use crate::error::{Error, Result};

pub use crate::traits::SeriesElement;

pub use crate::config::{ChartTemplate, EngineConfig, Parameters, PriceBasis};
pub use crate::engine::{Analysis, Engine};
pub use crate::series::{Bar, BarSeries, Finding};

// Indicator routines
pub use crate::indicators::{
    adx, atr, bollinger, cci, ema, heikin_ashi, macd, obv, rsi, sar, sma, stochastic, supertrend,
    true_range, vwap,
};

// Output types
pub use crate::indicators::{
    AdxOutput, BollingerOutput, MacdOutput, StochasticOutput, SupertrendOutput,
};

// Detectors and events
pub use crate::patterns::{
    detect_divergence, detect_doji, detect_engulfing, detect_fair_value_gaps, detect_hammer,
    detect_shooting_star, detect_zones, find_swings, CandlestickKind, CandlestickPattern,
    Confidence, Direction, Divergence, DivergenceKind, DivergenceSettings, DivergenceSource,
    FairValueGap, PatternEvent, Strength, SupplyDemandZone, ZoneKind,
};
