//! Engine configuration.
//!
//! [`EngineConfig`] is a plain value handed to every [`Engine::run`] call: a
//! flat set of toggles, one per indicator or detector family, plus the
//! numeric parameters of each family. It deserializes from partial documents,
//! with every missing field taking its default.
//!
//! [`ChartTemplate`] names the preset toggle sets offered to chart users.
//!
//! # Example
//!
//! ```
//! use chart_ta::{ChartTemplate, EngineConfig};
//!
//! let config: EngineConfig = serde_json::from_str(r#"{ "rsi": true, "params": { "rsi_period": 9 } }"#).unwrap();
//! assert!(config.rsi);
//! assert_eq!(config.params.rsi_period, 9);
//! assert_eq!(config.params.macd_slow, 26);
//!
//! let momentum = EngineConfig::from_template("momentum".parse::<ChartTemplate>().unwrap());
//! assert!(momentum.macd && momentum.stochastic);
//! ```
//!
//! [`Engine::run`]: crate::engine::Engine::run

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::validate_sar_params;
use crate::patterns::DivergenceSource;
use crate::traits::{validate_non_negative, validate_period, validate_positive};

/// Which bars the engine analyses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    /// The input bars as given.
    #[default]
    Regular,
    /// Heikin-Ashi bars derived from the input.
    HeikinAshi,
}

/// Numeric parameters of every family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// RSI period.
    pub rsi_period: usize,
    /// MACD fast EMA period.
    pub macd_fast: usize,
    /// MACD slow EMA period.
    pub macd_slow: usize,
    /// MACD signal EMA period.
    pub macd_signal: usize,
    /// Stochastic %K window.
    pub stoch_k: usize,
    /// Stochastic %D smoothing.
    pub stoch_d: usize,
    /// CCI period.
    pub cci_period: usize,
    /// Bollinger period.
    pub bollinger_period: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_k: f64,
    /// ATR period.
    pub atr_period: usize,
    /// ADX period.
    pub adx_period: usize,
    /// Parabolic SAR acceleration step and starting factor.
    pub sar_accel: f64,
    /// Parabolic SAR acceleration cap.
    pub sar_max: f64,
    /// Supertrend ATR period.
    pub supertrend_period: usize,
    /// Supertrend ATR multiplier.
    pub supertrend_multiplier: f64,
    /// Minimum fair value gap, in percent of the reference price.
    pub fvg_min_gap_percent: f64,
    /// Minimum move, in percent, for a supply/demand zone.
    pub zone_min_move_percent: f64,
    /// Bars scanned after a zone origin.
    pub zone_lookahead: usize,
    /// Swing-point half window.
    pub swing_window: usize,
    /// Largest distance between paired price swings.
    pub divergence_lookback: usize,
    /// Slack when matching indicator swings to price swings.
    pub divergence_tolerance: usize,
    /// Indicator divergence is measured against.
    pub divergence_source: DivergenceSource,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            stoch_k: 14,
            stoch_d: 3,
            cci_period: 20,
            bollinger_period: 20,
            bollinger_k: 2.0,
            atr_period: 14,
            adx_period: 14,
            sar_accel: 0.02,
            sar_max: 0.2,
            supertrend_period: 10,
            supertrend_multiplier: 3.0,
            fvg_min_gap_percent: 0.5,
            zone_min_move_percent: 2.0,
            zone_lookahead: 3,
            swing_window: 5,
            divergence_lookback: 50,
            divergence_tolerance: 3,
            divergence_source: DivergenceSource::Rsi,
        }
    }
}

/// Toggles and parameters for one engine invocation.
///
/// Every toggle defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EngineConfig {
    /// Bars the families run on.
    pub basis: PriceBasis,
    /// 20-bar SMA.
    pub sma20: bool,
    /// 50-bar SMA.
    pub sma50: bool,
    /// 200-bar SMA.
    pub sma200: bool,
    /// 20-bar EMA.
    pub ema20: bool,
    /// RSI.
    pub rsi: bool,
    /// MACD line, signal and histogram.
    pub macd: bool,
    /// Stochastic %K and %D.
    pub stochastic: bool,
    /// CCI.
    pub cci: bool,
    /// Bollinger Bands.
    pub bollinger: bool,
    /// ATR.
    pub atr: bool,
    /// ADX with +DI/-DI.
    pub adx: bool,
    /// Parabolic SAR.
    pub sar: bool,
    /// Supertrend.
    pub supertrend: bool,
    /// On-Balance Volume.
    pub obv: bool,
    /// VWAP.
    pub vwap: bool,
    /// Engulfing patterns.
    pub engulfing: bool,
    /// Hammers.
    pub hammer: bool,
    /// Shooting stars.
    pub shooting_star: bool,
    /// Doji bars.
    pub doji: bool,
    /// Fair value gaps.
    pub fair_value_gaps: bool,
    /// Supply/demand zones.
    pub supply_demand_zones: bool,
    /// Regular divergences.
    pub divergence: bool,
    /// Family parameters.
    pub params: Parameters,
}

impl EngineConfig {
    /// Configuration with the toggles of a chart template and default parameters.
    #[must_use]
    pub fn from_template(template: ChartTemplate) -> Self {
        let base = Self::default();
        match template {
            ChartTemplate::Clean => base,
            ChartTemplate::Trending => Self {
                sma20: true,
                sma50: true,
                sma200: true,
                adx: true,
                ..base
            },
            ChartTemplate::Momentum => Self {
                ema20: true,
                rsi: true,
                macd: true,
                stochastic: true,
                ..base
            },
            ChartTemplate::Volatility => Self {
                bollinger: true,
                atr: true,
                cci: true,
                ..base
            },
            ChartTemplate::DayTrading => Self {
                ema20: true,
                vwap: true,
                rsi: true,
                macd: true,
                ..base
            },
            ChartTemplate::SwingTrading => Self {
                sma20: true,
                sma50: true,
                bollinger: true,
                macd: true,
                adx: true,
                ..base
            },
            ChartTemplate::Complete => Self {
                sma20: true,
                sma50: true,
                ema20: true,
                bollinger: true,
                rsi: true,
                macd: true,
                stochastic: true,
                atr: true,
                adx: true,
                vwap: true,
                ..base
            },
            ChartTemplate::Scalping => Self {
                ema20: true,
                vwap: true,
                sar: true,
                stochastic: true,
                ..base
            },
            ChartTemplate::Breakout => Self {
                bollinger: true,
                atr: true,
                obv: true,
                adx: true,
                ..base
            },
            ChartTemplate::Reversal => Self {
                rsi: true,
                macd: true,
                stochastic: true,
                cci: true,
                ..base
            },
        }
    }

    /// Checks the parameters of every enabled family.
    ///
    /// # Errors
    ///
    /// Returns the first `Error::InvalidPeriod` or `Error::InvalidParameter`
    /// found.
    pub fn validate(&self) -> Result<()> {
        let p = &self.params;
        if self.rsi {
            validate_period(p.rsi_period)?;
        }
        if self.macd {
            validate_macd(p)?;
        }
        if self.stochastic {
            validate_period(p.stoch_k)?;
            validate_period(p.stoch_d)?;
        }
        if self.cci {
            validate_period(p.cci_period)?;
        }
        if self.bollinger {
            validate_period(p.bollinger_period)?;
            validate_positive(p.bollinger_k, "bollinger_k")?;
        }
        if self.atr {
            validate_period(p.atr_period)?;
        }
        if self.adx {
            validate_period(p.adx_period)?;
        }
        if self.sar {
            validate_sar_params(p.sar_accel, p.sar_max)?;
        }
        if self.supertrend {
            validate_period(p.supertrend_period)?;
            validate_positive(p.supertrend_multiplier, "supertrend_multiplier")?;
        }
        if self.fair_value_gaps {
            validate_non_negative(p.fvg_min_gap_percent, "fvg_min_gap_percent")?;
        }
        if self.supply_demand_zones {
            validate_period(p.zone_lookahead)?;
            validate_non_negative(p.zone_min_move_percent, "zone_min_move_percent")?;
        }
        if self.divergence {
            validate_period(p.swing_window)?;
            validate_period(p.divergence_lookback)?;
            match p.divergence_source {
                DivergenceSource::Rsi => validate_period(p.rsi_period)?,
                DivergenceSource::Macd => validate_macd(p)?,
            }
        }
        Ok(())
    }
}

fn validate_macd(p: &Parameters) -> Result<()> {
    validate_period(p.macd_fast)?;
    validate_period(p.macd_slow)?;
    validate_period(p.macd_signal)
}

/// Named preset toggle sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartTemplate {
    /// No indicators.
    Clean,
    /// Moving averages and trend strength.
    Trending,
    /// Momentum oscillators.
    Momentum,
    /// Bands and range measures.
    Volatility,
    /// Intraday signal set.
    DayTrading,
    /// Multi-day trend following.
    SwingTrading,
    /// Every major indicator.
    Complete,
    /// Very short-term signal set.
    Scalping,
    /// Volatility breakouts.
    Breakout,
    /// Reversal oscillators.
    Reversal,
}

impl ChartTemplate {
    /// Every template, in presentation order.
    pub const ALL: [Self; 10] = [
        Self::Clean,
        Self::Trending,
        Self::Momentum,
        Self::Volatility,
        Self::DayTrading,
        Self::SwingTrading,
        Self::Complete,
        Self::Scalping,
        Self::Breakout,
        Self::Reversal,
    ];

    /// Snake-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Trending => "trending",
            Self::Momentum => "momentum",
            Self::Volatility => "volatility",
            Self::DayTrading => "day_trading",
            Self::SwingTrading => "swing_trading",
            Self::Complete => "complete",
            Self::Scalping => "scalping",
            Self::Breakout => "breakout",
            Self::Reversal => "reversal",
        }
    }

    /// One-line description for pickers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clean => "Price action only, no indicators",
            Self::Trending => "Moving averages and trend indicators",
            Self::Momentum => "RSI, MACD, and momentum oscillators",
            Self::Volatility => "Bollinger Bands and ATR for volatility",
            Self::DayTrading => "Quick signals for intraday trading",
            Self::SwingTrading => "Multi-day trend following",
            Self::Complete => "All major indicators enabled",
            Self::Scalping => "Very short-term trading signals",
            Self::Breakout => "Identify volatility breakouts",
            Self::Reversal => "Spot trend reversals early",
        }
    }
}

impl fmt::Display for ChartTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartTemplate {
    type Err = Error;

    /// Accepts the snake-case name as well as camelCase and kebab-case
    /// spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|t| t.name().replace('_', "") == key)
            .ok_or_else(|| Error::UnknownTemplate { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.basis, PriceBasis::Regular);
        assert!(!config.rsi && !config.divergence);
        assert_eq!(config.params.supertrend_multiplier, 3.0);
        assert_eq!(config.params.divergence_source, DivergenceSource::Rsi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "basis": "heikin_ashi", "divergence": true, "params": { "divergence_source": "macd" } }"#,
        )
        .unwrap();
        assert_eq!(config.basis, PriceBasis::HeikinAshi);
        assert!(config.divergence);
        assert_eq!(config.params.divergence_source, DivergenceSource::Macd);
        assert_eq!(config.params.swing_window, 5);
    }

    #[test]
    fn test_validate_only_checks_enabled_families() {
        let mut config = EngineConfig::default();
        config.params.rsi_period = 0;
        assert!(config.validate().is_ok());

        config.rsi = true;
        assert!(matches!(config.validate(), Err(Error::InvalidPeriod { .. })));
    }

    #[test]
    fn test_validate_divergence_checks_its_source() {
        let mut config = EngineConfig {
            divergence: true,
            ..EngineConfig::default()
        };
        config.params.divergence_source = DivergenceSource::Macd;
        config.params.macd_signal = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_sar_bounds() {
        let mut config = EngineConfig {
            sar: true,
            ..EngineConfig::default()
        };
        config.params.sar_accel = 0.5;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "sar_accel", .. })
        ));
    }

    #[test]
    fn test_template_toggles() {
        let complete = EngineConfig::from_template(ChartTemplate::Complete);
        assert!(complete.sma20 && complete.sma50 && complete.ema20 && complete.vwap);
        assert!(!complete.sma200 && !complete.cci && !complete.sar);

        let scalping = EngineConfig::from_template(ChartTemplate::Scalping);
        assert!(scalping.sar && scalping.stochastic && scalping.vwap && scalping.ema20);

        assert_eq!(
            EngineConfig::from_template(ChartTemplate::Clean),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_template_names_round_trip() {
        for template in ChartTemplate::ALL {
            assert_eq!(template.name().parse::<ChartTemplate>().unwrap(), template);
            assert!(!template.description().is_empty());
        }
        assert_eq!("dayTrading".parse::<ChartTemplate>().unwrap(), ChartTemplate::DayTrading);
        assert_eq!("Swing-Trading".parse::<ChartTemplate>().unwrap(), ChartTemplate::SwingTrading);
    }

    #[test]
    fn test_unknown_template() {
        assert_eq!(
            "fibonacci".parse::<ChartTemplate>(),
            Err(Error::UnknownTemplate {
                name: "fibonacci".to_string()
            })
        );
    }
}
