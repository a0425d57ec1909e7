//! Worked scenarios with hand-checked expected values.

mod common;

use chart_ta::indicators::{adx, atr, bollinger, cci, obv, rsi, sma, stochastic, vwap};
use chart_ta::patterns::{
    detect_doji, detect_engulfing, detect_fair_value_gaps, detect_hammer, detect_shooting_star,
    detect_zones, CandleShape, CandlestickKind, Confidence, Direction, Strength, ZoneKind,
};
use chart_ta::{Bar, BarSeries};

use common::{approx_eq, flat_bars, EPSILON};

// ==================== Flat series ====================

#[test]
fn test_flat_series_moving_average_and_bands() {
    let series = BarSeries::new(flat_bars(30, 100.0, 1000.0));
    let cols = series.columns();

    let sma20 = sma(&cols.close, 20).unwrap();
    assert!(common::verify_nan_prefix(&sma20, 19));
    for v in &sma20[19..30] {
        assert!(approx_eq(*v, 100.0, EPSILON));
    }

    let bands = bollinger(&cols.close, 20, 2.0).unwrap();
    for i in 19..30 {
        assert!(approx_eq(bands.upper[i], 100.0, EPSILON));
        assert!(approx_eq(bands.lower[i], 100.0, EPSILON));
        assert_eq!(bands.upper[i], bands.lower[i]);
    }
}

#[test]
fn test_flat_series_volume_indicators() {
    let cols = BarSeries::new(flat_bars(30, 100.0, 1000.0)).columns();

    let result = obv(&cols.close, &cols.volume).unwrap();
    assert!(result.iter().all(|&v| v == 1000.0));

    let result = vwap(&cols.high, &cols.low, &cols.close, &cols.volume).unwrap();
    assert!(result.iter().all(|&v| approx_eq(v, 100.0, EPSILON)));
}

#[test]
fn test_flat_series_degenerate_ratios() {
    let cols = BarSeries::new(flat_bars(40, 100.0, 1000.0)).columns();

    // no losses at all
    let r = rsi(&cols.close, 14).unwrap();
    assert!(r[14..].iter().all(|&v| v == 100.0));

    // zero range sits mid-scale
    let stoch = stochastic(&cols.high, &cols.low, &cols.close, 14, 3).unwrap();
    assert!(stoch.k[13..].iter().all(|&v| v == 50.0));
    assert!(stoch.d[15..].iter().all(|&v| v == 50.0));

    // zero mean deviation
    let c = cci(&cols.high, &cols.low, &cols.close, 20).unwrap();
    assert!(c[19..].iter().all(|&v| v == 0.0));

    let a = atr(&cols.high, &cols.low, &cols.close, 14).unwrap();
    assert!(a[14..].iter().all(|&v| v == 0.0));

    let out = adx(&cols.high, &cols.low, &cols.close, 14).unwrap();
    assert!(out.plus_di[14..].iter().all(|&v| v == 0.0));
    assert!(out.adx[27..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_flat_series_has_no_candlestick_patterns() {
    let bars = flat_bars(30, 100.0, 1000.0);
    assert!(detect_doji(&bars).is_empty());
    assert!(detect_hammer(&bars).is_empty());
    assert!(detect_shooting_star(&bars).is_empty());
    assert!(detect_engulfing(&bars).is_empty());
    assert!(detect_zones(&bars, 0.0, 3).unwrap().is_empty());
}

// ==================== Single bar geometry ====================

#[test]
fn test_moderate_bar_is_neither_doji_nor_hammer() {
    let bar = Bar::new(0, 10.0, 12.0, 8.0, 11.0, 100.0);
    let shape = CandleShape::of(&bar);
    assert_eq!(shape.body, 1.0);
    assert_eq!(shape.range, 4.0);
    assert_eq!(shape.body_ratio(), 0.25);
    assert_eq!(shape.lower_wick, 2.0);
    assert_eq!(shape.upper_wick, 1.0);

    assert!(detect_doji(&[bar]).is_empty());
    assert!(detect_hammer(&[bar]).is_empty());
}

#[test]
fn test_hammer_and_shooting_star() {
    // body 0.5, lower wick 4, upper wick 0.1
    let hammer = Bar::new(0, 20.0, 20.6, 16.0, 20.5, 1.0);
    let found = detect_hammer(&[hammer]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, CandlestickKind::Hammer);
    assert_eq!(found[0].confidence, Confidence::High);
    assert!(detect_shooting_star(&[hammer]).is_empty());

    let star = Bar::new(1, 20.5, 25.0, 19.9, 20.0, 1.0);
    let found = detect_shooting_star(&[star]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, CandlestickKind::ShootingStar);
    assert!(detect_hammer(&[star]).is_empty());
}

#[test]
fn test_doji_confidence() {
    let tight = Bar::new(0, 10.0, 11.0, 9.0, 10.05, 1.0);
    let loose = Bar::new(1, 10.0, 11.0, 9.0, 10.15, 1.0);
    let found = detect_doji(&[tight, loose]);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].confidence, Confidence::High);
    assert_eq!(found[1].confidence, Confidence::Medium);
}

#[test]
fn test_bearish_engulfing() {
    let bars = vec![
        Bar::new(0, 10.0, 11.2, 9.9, 11.0, 1.0),
        Bar::new(1, 11.2, 11.3, 9.0, 9.2, 1.0),
    ];
    let found = detect_engulfing(&bars);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].index, 1);
    assert_eq!(found[0].kind, CandlestickKind::BearishEngulfing);
    assert_eq!(found[0].confidence, Confidence::High);
    assert_eq!(found[0].price, 9.2);
}

// ==================== Gaps and zones ====================

#[test]
fn test_bullish_fair_value_gap() {
    let bars = vec![
        Bar::new(0, 98.0, 100.0, 97.0, 99.0, 1.0),
        Bar::new(1, 99.5, 106.0, 99.0, 105.0, 1.0),
        Bar::new(2, 105.0, 107.0, 103.0, 106.0, 1.0),
    ];
    let gaps = detect_fair_value_gaps(&bars, 0.5).unwrap();
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].index, 1);
    assert_eq!(gaps[0].direction, Direction::Bullish);
    assert_eq!(gaps[0].gap_bottom, 100.0);
    assert_eq!(gaps[0].gap_top, 103.0);

    // 3% gap is below a 5% minimum
    assert!(detect_fair_value_gaps(&bars, 5.0).unwrap().is_empty());
}

#[test]
fn test_gap_needs_matching_middle_colour() {
    let bars = vec![
        Bar::new(0, 98.0, 100.0, 97.0, 99.0, 1.0),
        Bar::new(1, 105.0, 106.0, 99.0, 100.5, 1.0),
        Bar::new(2, 105.0, 107.0, 103.0, 106.0, 1.0),
    ];
    assert!(detect_fair_value_gaps(&bars, 0.5).unwrap().is_empty());
}

#[test]
fn test_demand_zone_strength() {
    let mut bars = flat_bars(6, 100.0, 1.0);
    // origin at index 1 sees a 6% high within three bars
    bars[3] = Bar::new(3, 100.0, 106.0, 100.0, 105.0, 1.0);
    let zones = detect_zones(&bars, 2.0, 3).unwrap();

    let demand: Vec<_> = zones.iter().filter(|z| z.kind == ZoneKind::Demand).collect();
    assert_eq!(demand.iter().map(|z| z.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(demand.iter().all(|z| z.strength == Strength::Strong));
    assert!(approx_eq(demand[0].move_percent, 6.0, EPSILON));
    assert!(zones.iter().all(|z| z.kind == ZoneKind::Demand));
}

#[test]
fn test_partial_body_overlap_is_not_engulfing() {
    // larger bullish body that opens above the prior close
    let bars = vec![
        Bar::new(0, 11.0, 11.2, 9.8, 10.0, 1.0),
        Bar::new(1, 10.2, 12.5, 10.1, 12.0, 1.0),
    ];
    assert!(detect_engulfing(&bars).is_empty());

    let bars = vec![
        Bar::new(0, 11.0, 11.2, 9.8, 10.0, 1.0),
        Bar::new(1, 9.9, 12.5, 9.8, 11.5, 1.0),
    ];
    let found = detect_engulfing(&bars);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, CandlestickKind::BullishEngulfing);
    assert_eq!(found[0].confidence, Confidence::High);
}
