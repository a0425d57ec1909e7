//! Empty, short and malformed inputs.
//!
//! Short series are not errors: every column routine returns undefined
//! output and every detector returns no events. Only invalid parameters and
//! misaligned columns fail.

mod common;

use chart_ta::indicators::{
    adx, atr, bollinger, cci, ema, heikin_ashi, macd, obv, rsi, sar, sma, stochastic, supertrend,
    true_range, vwap,
};
use chart_ta::patterns::{
    detect_divergence, detect_doji, detect_engulfing, detect_fair_value_gaps, detect_hammer,
    detect_shooting_star, detect_zones, find_swings, DivergenceSettings, DivergenceSource,
};
use chart_ta::{Bar, BarSeries, Engine, EngineConfig, Error};

use common::count_nans;

fn all_nan(data: &[f64]) -> bool {
    data.iter().all(|v| v.is_nan())
}

#[test]
fn test_empty_columns() {
    let e: Vec<f64> = Vec::new();
    assert!(sma(&e, 5).unwrap().is_empty());
    assert!(ema(&e, 5).unwrap().is_empty());
    assert!(rsi(&e, 14).unwrap().is_empty());
    assert!(macd(&e, 12, 26, 9).unwrap().histogram.is_empty());
    assert!(stochastic(&e, &e, &e, 14, 3).unwrap().d.is_empty());
    assert!(cci(&e, &e, &e, 20).unwrap().is_empty());
    assert!(true_range(&e, &e, &e).unwrap().is_empty());
    assert!(atr(&e, &e, &e, 14).unwrap().is_empty());
    assert!(bollinger(&e, 20, 2.0).unwrap().upper.is_empty());
    assert!(adx(&e, &e, &e, 14).unwrap().adx.is_empty());
    assert!(sar(&e, &e, 0.02, 0.2).unwrap().is_empty());
    assert!(supertrend(&e, &e, &e, 10, 3.0).unwrap().bullish.is_empty());
    assert!(obv(&e, &e).unwrap().is_empty());
    assert!(vwap(&e, &e, &e, &e).unwrap().is_empty());
    assert!(heikin_ashi(&[]).is_empty());
}

#[test]
fn test_short_columns_are_undefined() {
    let close = vec![10.0_f64, 11.0, 10.5];
    let high = vec![10.5_f64, 11.5, 11.0];
    let low = vec![9.5_f64, 10.5, 10.0];

    assert!(all_nan(&sma(&close, 5).unwrap()));
    assert!(all_nan(&ema(&close, 5).unwrap()));
    assert!(all_nan(&rsi(&close, 3).unwrap()));
    assert!(all_nan(&macd(&close, 12, 26, 9).unwrap().macd));
    assert!(all_nan(&stochastic(&high, &low, &close, 5, 3).unwrap().k));
    assert!(all_nan(&cci(&high, &low, &close, 5).unwrap()));
    assert!(all_nan(&atr(&high, &low, &close, 3).unwrap()));
    assert!(all_nan(&bollinger(&close, 5, 2.0).unwrap().middle));
    assert!(all_nan(&adx(&high, &low, &close, 2).unwrap().adx));

    let st = supertrend(&high, &low, &close, 3, 3.0).unwrap();
    assert!(all_nan(&st.value));
    assert!(st.bullish.iter().all(|&b| b));

    let one = sar(&high[..1], &low[..1], 0.02, 0.2).unwrap();
    assert_eq!(count_nans(&one), 1);
}

#[test]
fn test_zero_volume_vwap_is_undefined() {
    let price = vec![10.0_f64, 11.0, 12.0];
    let volume = vec![0.0_f64, 0.0, 5.0];
    let result = vwap(&price, &price, &price, &volume).unwrap();
    assert!(result[0].is_nan() && result[1].is_nan());
    assert_eq!(result[2], 12.0);
}

#[test]
fn test_detectors_on_short_input() {
    let bars = vec![Bar::new(0, 10.0, 10.5, 9.9, 10.01, 1.0)];
    assert!(detect_engulfing(&bars).is_empty());
    assert!(detect_fair_value_gaps(&bars, 0.5).unwrap().is_empty());
    assert!(detect_zones(&bars, 2.0, 3).unwrap().is_empty());
    assert_eq!(detect_doji(&bars).len(), 1);

    let empty: Vec<Bar> = Vec::new();
    assert!(detect_hammer(&empty).is_empty());
    assert!(detect_shooting_star(&empty).is_empty());
    assert!(detect_doji(&empty).is_empty());
    assert!(find_swings::<f64>(&[], 5).unwrap().highs.is_empty());
    assert!(detect_divergence(&empty, &[], DivergenceSource::Rsi, DivergenceSettings::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_nan_indicator_never_forms_swings() {
    let values = vec![f64::NAN; 20];
    let swings = find_swings(&values, 2).unwrap();
    assert!(swings.highs.is_empty() && swings.lows.is_empty());
}

#[test]
fn test_non_positive_reference_prices_are_skipped() {
    let bars = vec![
        Bar::new(0, -2.0, 0.0, -3.0, -1.0, 1.0),
        Bar::new(1, -1.0, 4.0, -1.0, 3.5, 1.0),
        Bar::new(2, 3.0, 5.0, 2.0, 4.0, 1.0),
    ];
    assert!(detect_fair_value_gaps(&bars, 0.0).unwrap().is_empty());

    let zero_close = vec![
        Bar::new(0, 0.0, 0.0, 0.0, 0.0, 1.0),
        Bar::new(1, 1.0, 10.0, 1.0, 5.0, 1.0),
    ];
    assert!(detect_zones(&zero_close, 0.0, 1).unwrap().is_empty());
}

#[test]
fn test_invalid_parameters() {
    let data = vec![1.0_f64; 30];
    assert!(matches!(sma(&data, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(rsi(&data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(
        bollinger(&data, 20, 0.0),
        Err(Error::InvalidParameter { name: "bollinger_k", .. })
    ));
    assert!(matches!(
        bollinger(&data, 20, f64::NAN),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(sar(&data, &data, 0.3, 0.2).is_err());
    assert!(sar(&data, &data, 0.0, 0.2).is_err());
    assert!(supertrend(&data, &data, &data, 10, -3.0).is_err());
    assert!(detect_fair_value_gaps(&[], -1.0).is_err());
    assert!(detect_zones(&[], 2.0, 0).is_err());
    assert!(find_swings(&data, 0).is_err());
}

#[test]
fn test_misaligned_columns() {
    let long = vec![1.0_f64; 10];
    let short = vec![1.0_f64; 9];
    assert!(matches!(obv(&long, &short), Err(Error::LengthMismatch { .. })));
    assert!(matches!(atr(&long, &long, &short, 3), Err(Error::LengthMismatch { .. })));
    assert!(matches!(
        vwap(&long, &long, &long, &short),
        Err(Error::LengthMismatch { .. })
    ));

    let bars: Vec<Bar> = (0..10).map(|i| Bar::new(i, 1.0, 1.0, 1.0, 1.0, 1.0)).collect();
    assert!(matches!(
        detect_divergence(&bars, &short, DivergenceSource::Rsi, DivergenceSettings::default()),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn test_engine_on_empty_series() {
    let mut config = EngineConfig::from_template(chart_ta::ChartTemplate::Complete);
    config.divergence = true;
    config.fair_value_gaps = true;
    config.supply_demand_zones = true;

    let analysis = Engine::run(&BarSeries::default(), &config);
    assert!(analysis.failures.is_empty());
    assert!(analysis.events.is_empty());
    assert!(analysis.findings.is_empty());
    assert!(analysis.lines.values().all(Vec::is_empty));
}

#[test]
fn test_engine_on_short_series() {
    let series: BarSeries = (0..5)
        .map(|i| Bar::new(i, 10.0, 11.0, 9.0, 10.5, 100.0))
        .collect();
    let config = EngineConfig::from_template(chart_ta::ChartTemplate::Complete);
    let analysis = Engine::run(&series, &config);

    assert!(analysis.failures.is_empty());
    assert!(all_nan(analysis.line("sma50").unwrap()));
    assert!(all_nan(analysis.line("macd").unwrap()));
    assert_eq!(analysis.line("vwap").unwrap().len(), 5);
}
