//! Reusable numerical kernels.
//!
//! # Kernels
//!
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min
//! - [`wilder`]: explicit state records for Wilder smoothing (RSI, ATR, ADX)

pub mod rolling_extrema;
pub mod wilder;

pub use rolling_extrema::{
    rolling_extrema_lookback, rolling_max, rolling_min, Extremum, MonotonicDeque,
};
pub use wilder::{WilderAverage, WilderSum};
