//! Technical analysis indicators.
//!
//! Every routine maps aligned input columns (plus parameters) to output
//! columns of the same length. Warm-up slots are NaN and each indicator has a
//! matching `*_lookback` function giving their count.
//!
//! # Indicator Families
//!
//! ## Moving Averages
//!
//! - [`sma`] - Simple Moving Average
//! - [`ema`] - Exponential Moving Average seeded by the SMA
//!
//! ## Momentum Oscillators
//!
//! - [`rsi`] - Relative Strength Index with explicit Wilder state
//! - [`macd`] - MACD line, signal and histogram
//! - [`stochastic`] - Stochastic %K and %D
//! - [`cci`] - Commodity Channel Index
//!
//! ## Volatility and Trend
//!
//! - [`atr`] / [`true_range`] - Average True Range
//! - [`bollinger`] - Bollinger Bands
//! - [`adx`] - Average Directional Index with +DI/-DI
//! - [`sar`] - Parabolic SAR
//! - [`supertrend`] - Supertrend value and trend flag
//!
//! ## Volume
//!
//! - [`obv`] - On-Balance Volume
//! - [`vwap`] - anchored Volume Weighted Average Price
//!
//! ## Bar Transforms
//!
//! - [`heikin_ashi`] - Heikin-Ashi bars
//!
//! # Degenerate Input
//!
//! Empty columns and columns shorter than the warm-up are not errors: the
//! result is all NaN. Errors are returned only for invalid parameters and for
//! columns of different lengths.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert!(sma_result[3].is_nan() && !sma_result[4].is_nan());
//! assert!(!ema_result[4].is_nan());
//! assert!(!rsi_result[5].is_nan());
//! ```

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod heikin_ashi;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sar;
pub mod sma;
pub mod stochastic;
pub mod supertrend;
pub mod vwap;

pub use adx::{adx, adx_lookback, di_lookback, directional_movement, AdxOutput};
pub use atr::{atr, atr_lookback, true_range};
pub use bollinger::{bollinger, bollinger_lookback, BollingerOutput};
pub use cci::{cci, cci_lookback, typical_price};
pub use ema::{ema, ema_from, ema_lookback};
pub use heikin_ashi::heikin_ashi;
pub use macd::{macd, macd_line_lookback, macd_signal_lookback, MacdOutput};
pub use obv::{obv, obv_lookback};
pub use rsi::{rsi, rsi_lookback, RsiState};
pub use sar::{sar, sar_lookback, validate_sar_params, SarState};
pub use sma::{sma, sma_lookback};
pub use stochastic::{stochastic, stochastic_d_lookback, stochastic_k_lookback, StochasticOutput};
pub use supertrend::{supertrend, supertrend_lookback, SupertrendOutput, SupertrendState};
pub use vwap::{vwap, vwap_lookback};
