//! chart-ta: technical analysis engine for OHLCV bar series
//!
//! This crate computes indicator columns and chart-pattern events over a
//! finished, chronologically ascending series of price bars. Every routine is
//! a deterministic single pass over its input; nothing is cached or shared
//! between calls.
//!
//! # Features
//!
//! - **Aligned output**: every indicator column has the input's length, with
//!   NaN in warm-up slots
//! - **Generics**: column routines work on both `f32` and `f64`
//! - **Explicit state**: Wilder, SAR and Supertrend recurrences fold a named
//!   state record through the series
//! - **Forgiving input**: empty or short series give undefined columns and no
//!   events instead of errors
//!
//! # Quick Start
//!
//! ```
//! use chart_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! ```
//!
//! # Modules
//!
//! - [`indicators`]: moving averages, oscillators, volatility/trend and
//!   volume indicators, and the Heikin-Ashi transform
//! - [`patterns`]: candlestick rules, fair value gaps, supply/demand zones,
//!   swing points and divergence
//! - [`engine`]: runs a configured set of families over a [`BarSeries`]
//! - [`config`]: toggles, parameters and chart templates
//! - [`kernels`]: rolling extrema and Wilder smoothing building blocks
//!
//! # Error Handling
//!
//! Routines return [`Result<T, Error>`] and fail only on invalid parameters
//! or misaligned columns:
//!
//! ```
//! use chart_ta::prelude::*;
//!
//! // short input is not an error
//! let result = sma(&[1.0_f64, 2.0], 10).unwrap();
//! assert!(result.iter().all(|x| x.is_nan()));
//!
//! // a zero period is
//! assert!(matches!(sma(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
//! ```
//!
//! # Logging
//!
//! [`Engine::run`] reports progress, failed families and data-quality
//! findings through [`tracing`]. The crate never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod patterns;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;

pub use config::{ChartTemplate, EngineConfig, Parameters, PriceBasis};
pub use engine::{Analysis, Engine, FamilyFailure};
pub use error::{Error, Result};
pub use patterns::PatternEvent;
pub use series::{Bar, BarSeries, Columns, Finding};
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON};
