//! Engine orchestration.
//!
//! [`Engine::run`] takes a bar series and an explicit [`EngineConfig`] and
//! runs every enabled indicator family and detector over it in one call. The
//! result is an [`Analysis`]: named output columns aligned with the analysed
//! bars, an ordered event list, data-quality findings and the families that
//! failed.
//!
//! A family that fails (for example because of a zero period) is logged and
//! recorded in [`Analysis::failures`]; the remaining families still run.
//!
//! # Column names
//!
//! | Toggle | Lines | Flags |
//! |--------|-------|-------|
//! | `sma20`, `sma50`, `sma200`, `ema20` | same name | |
//! | `rsi` | `rsi` | |
//! | `macd` | `macd`, `macd_signal`, `macd_histogram` | |
//! | `stochastic` | `stoch_k`, `stoch_d` | |
//! | `cci` | `cci` | |
//! | `bollinger` | `bb_upper`, `bb_middle`, `bb_lower` | |
//! | `atr` | `atr` | |
//! | `adx` | `adx`, `plus_di`, `minus_di` | |
//! | `sar` | `sar` | |
//! | `supertrend` | `supertrend` | `supertrend_bullish` |
//! | `obv`, `vwap` | same name | |
//!
//! # Example
//!
//! ```
//! use chart_ta::{Bar, BarSeries, Engine, EngineConfig};
//!
//! let series: BarSeries = (0..40)
//!     .map(|i| {
//!         let c = 100.0 + i as f64;
//!         Bar::new(i, c - 0.5, c + 1.0, c - 1.0, c, 1_000.0)
//!     })
//!     .collect();
//! let config = EngineConfig {
//!     sma20: true,
//!     rsi: true,
//!     ..EngineConfig::default()
//! };
//!
//! let analysis = Engine::run(&series, &config);
//! assert_eq!(analysis.line("sma20").unwrap().len(), 40);
//! assert_eq!(analysis.line("rsi").unwrap()[39], 100.0);
//! assert!(analysis.failures.is_empty());
//! ```

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::{debug, debug_span, trace, warn};

use crate::config::{EngineConfig, Parameters, PriceBasis};
use crate::error::{Error, Result};
use crate::indicators::{
    adx, atr, bollinger, cci, ema, heikin_ashi, macd, obv, rsi, sar, sma, stochastic, supertrend,
    vwap,
};
use crate::patterns::{
    detect_divergence, detect_doji, detect_engulfing, detect_fair_value_gaps, detect_hammer,
    detect_shooting_star, detect_zones, DivergenceSettings, DivergenceSource, PatternEvent,
};
use crate::series::{Bar, BarSeries, Columns, Finding};

/// A family that could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyFailure {
    /// Toggle name of the family.
    pub family: &'static str,
    /// Why it failed.
    #[serde(serialize_with = "serialize_display")]
    pub error: Error,
}

fn serialize_display<S: Serializer>(error: &Error, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of one engine invocation.
///
/// Undefined slots in `lines` are NaN, which serialises as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    /// Bars the families ran on: the input, or its Heikin-Ashi transform.
    pub bars: Vec<Bar>,
    /// Numeric output columns by name, aligned with `bars`.
    pub lines: BTreeMap<String, Vec<f64>>,
    /// Boolean output columns by name, aligned with `bars`.
    pub flags: BTreeMap<String, Vec<bool>>,
    /// Pattern events ordered by anchor index.
    pub events: Vec<PatternEvent>,
    /// Data-quality findings for the input series.
    pub findings: Vec<Finding>,
    /// Families that failed.
    pub failures: Vec<FamilyFailure>,
}

impl Analysis {
    /// Numeric column by name.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&[f64]> {
        self.lines.get(name).map(Vec::as_slice)
    }

    /// Boolean column by name.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&[bool]> {
        self.flags.get(name).map(Vec::as_slice)
    }
}

/// One named output column of a family.
enum Column {
    Line(Vec<f64>),
    Flag(Vec<bool>),
}

type FamilyOutput = Vec<(&'static str, Column)>;

/// Accumulates family results into an [`Analysis`].
struct Collector {
    analysis: Analysis,
}

impl Collector {
    fn fail(&mut self, family: &'static str, error: Error) {
        warn!(family, %error, "family failed, skipping");
        self.analysis.failures.push(FamilyFailure { family, error });
    }

    fn family(&mut self, enabled: bool, family: &'static str, compute: impl FnOnce() -> Result<FamilyOutput>) {
        if !enabled {
            return;
        }
        debug!(family, bars = self.analysis.bars.len(), "computing indicator family");
        match compute() {
            Ok(columns) => {
                for (name, column) in columns {
                    match column {
                        Column::Line(values) => {
                            self.analysis.lines.insert(name.to_owned(), values);
                        }
                        Column::Flag(values) => {
                            self.analysis.flags.insert(name.to_owned(), values);
                        }
                    }
                }
            }
            Err(error) => self.fail(family, error),
        }
    }

    fn detector(&mut self, enabled: bool, family: &'static str, detect: impl FnOnce() -> Result<Vec<PatternEvent>>) {
        if !enabled {
            return;
        }
        debug!(family, bars = self.analysis.bars.len(), "running detector");
        match detect() {
            Ok(events) => {
                trace!(family, events = events.len(), "detector finished");
                self.analysis.events.extend(events);
            }
            Err(error) => self.fail(family, error),
        }
    }
}

fn single(name: &'static str, values: Vec<f64>) -> FamilyOutput {
    vec![(name, Column::Line(values))]
}

fn events<T: Into<PatternEvent>>(records: Vec<T>) -> Vec<PatternEvent> {
    records.into_iter().map(Into::into).collect()
}

/// Indicator column the divergence pass compares price against.
fn divergence_source(cols: &Columns, p: &Parameters) -> Result<Vec<f64>> {
    match p.divergence_source {
        DivergenceSource::Rsi => rsi(&cols.close, p.rsi_period),
        DivergenceSource::Macd => Ok(macd(&cols.close, p.macd_fast, p.macd_slow, p.macd_signal)?.macd),
    }
}

/// Runs indicator families and pattern detectors over a bar series.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    /// Runs every family enabled in `config` over `series`.
    ///
    /// Never fails: invalid parameters of a family are reported in
    /// [`Analysis::failures`], and an empty or short series simply produces
    /// undefined columns and no events.
    #[must_use]
    pub fn run(series: &BarSeries, config: &EngineConfig) -> Analysis {
        let _span = debug_span!("engine_run", bars = series.len(), basis = ?config.basis).entered();

        let findings = series.inspect();
        if let Some(first) = findings.first() {
            warn!(
                count = findings.len(),
                first_index = first.index(),
                "input series has data-quality findings"
            );
        }

        let bars = match config.basis {
            PriceBasis::Regular => series.bars().to_vec(),
            PriceBasis::HeikinAshi => heikin_ashi(series.bars()),
        };
        let cols = BarSeries::new(bars.clone()).columns();
        let p = &config.params;

        let mut c = Collector {
            analysis: Analysis {
                bars,
                findings,
                ..Analysis::default()
            },
        };

        c.family(config.sma20, "sma20", || Ok(single("sma20", sma(&cols.close, 20)?)));
        c.family(config.sma50, "sma50", || Ok(single("sma50", sma(&cols.close, 50)?)));
        c.family(config.sma200, "sma200", || Ok(single("sma200", sma(&cols.close, 200)?)));
        c.family(config.ema20, "ema20", || Ok(single("ema20", ema(&cols.close, 20)?)));
        c.family(config.rsi, "rsi", || Ok(single("rsi", rsi(&cols.close, p.rsi_period)?)));
        c.family(config.macd, "macd", || {
            let out = macd(&cols.close, p.macd_fast, p.macd_slow, p.macd_signal)?;
            Ok(vec![
                ("macd", Column::Line(out.macd)),
                ("macd_signal", Column::Line(out.signal)),
                ("macd_histogram", Column::Line(out.histogram)),
            ])
        });
        c.family(config.stochastic, "stochastic", || {
            let out = stochastic(&cols.high, &cols.low, &cols.close, p.stoch_k, p.stoch_d)?;
            Ok(vec![("stoch_k", Column::Line(out.k)), ("stoch_d", Column::Line(out.d))])
        });
        c.family(config.cci, "cci", || {
            Ok(single("cci", cci(&cols.high, &cols.low, &cols.close, p.cci_period)?))
        });
        c.family(config.bollinger, "bollinger", || {
            let out = bollinger(&cols.close, p.bollinger_period, p.bollinger_k)?;
            Ok(vec![
                ("bb_upper", Column::Line(out.upper)),
                ("bb_middle", Column::Line(out.middle)),
                ("bb_lower", Column::Line(out.lower)),
            ])
        });
        c.family(config.atr, "atr", || {
            Ok(single("atr", atr(&cols.high, &cols.low, &cols.close, p.atr_period)?))
        });
        c.family(config.adx, "adx", || {
            let out = adx(&cols.high, &cols.low, &cols.close, p.adx_period)?;
            Ok(vec![
                ("adx", Column::Line(out.adx)),
                ("plus_di", Column::Line(out.plus_di)),
                ("minus_di", Column::Line(out.minus_di)),
            ])
        });
        c.family(config.sar, "sar", || {
            Ok(single("sar", sar(&cols.high, &cols.low, p.sar_accel, p.sar_max)?))
        });
        c.family(config.supertrend, "supertrend", || {
            let out = supertrend(
                &cols.high,
                &cols.low,
                &cols.close,
                p.supertrend_period,
                p.supertrend_multiplier,
            )?;
            Ok(vec![
                ("supertrend", Column::Line(out.value)),
                ("supertrend_bullish", Column::Flag(out.bullish)),
            ])
        });
        c.family(config.obv, "obv", || Ok(single("obv", obv(&cols.close, &cols.volume)?)));
        c.family(config.vwap, "vwap", || {
            Ok(single("vwap", vwap(&cols.high, &cols.low, &cols.close, &cols.volume)?))
        });

        let bars = c.analysis.bars.clone();
        c.detector(config.engulfing, "engulfing", || Ok(events(detect_engulfing(&bars))));
        c.detector(config.hammer, "hammer", || Ok(events(detect_hammer(&bars))));
        c.detector(config.shooting_star, "shooting_star", || Ok(events(detect_shooting_star(&bars))));
        c.detector(config.doji, "doji", || Ok(events(detect_doji(&bars))));
        c.detector(config.fair_value_gaps, "fair_value_gaps", || {
            Ok(events(detect_fair_value_gaps(&bars, p.fvg_min_gap_percent)?))
        });
        c.detector(config.supply_demand_zones, "supply_demand_zones", || {
            Ok(events(detect_zones(&bars, p.zone_min_move_percent, p.zone_lookahead)?))
        });
        c.detector(config.divergence, "divergence", || {
            let source = divergence_source(&cols, p)?;
            let settings = DivergenceSettings {
                swing_window: p.swing_window,
                lookback: p.divergence_lookback,
                tolerance: p.divergence_tolerance,
            };
            Ok(events(detect_divergence(&bars, &source, p.divergence_source, settings)?))
        });

        let mut analysis = c.analysis;
        analysis.events.sort_by_key(PatternEvent::index);
        debug!(
            lines = analysis.lines.len(),
            events = analysis.events.len(),
            failures = analysis.failures.len(),
            "engine run complete"
        );
        analysis
    }
}
