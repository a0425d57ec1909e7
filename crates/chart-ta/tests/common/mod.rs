//! Shared test utilities for chart-ta integration tests.

use chart_ta::{Bar, BarSeries};

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality where two NaN values compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Count the number of NaN values in a slice.
#[allow(dead_code)]
pub fn count_nans(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// `n` identical flat bars.
#[allow(dead_code)]
pub fn flat_bars(n: usize, price: f64, volume: f64) -> Vec<Bar> {
    (0..n)
        .map(|i| Bar::new(i as i64, price, price, price, price, volume))
        .collect()
}

/// Deterministic wavy OHLCV bars around 100, always well-formed.
#[allow(dead_code)]
pub fn wave_bars(n: usize) -> Vec<Bar> {
    let mut price = 100.0;
    (0..n)
        .map(|i| {
            let x = i as f64;
            price += (x * 0.1).sin() * 2.0 + (x * 0.03).cos() * 1.5;
            price = price.max(10.0);
            let open = price + (x * 0.4).sin() * 0.8;
            let close = price - (x * 0.4).sin() * 0.8;
            let high = open.max(close) + 0.5 + (x * 0.07).sin().abs();
            let low = open.min(close) - 0.5 - (x * 0.05).cos().abs();
            Bar::new(1_700_000_000 + i as i64 * 60, open, high, low, close, 1_000.0 + (x * 0.3).cos() * 400.0)
        })
        .collect()
}

/// [`wave_bars`] wrapped in a series.
#[allow(dead_code)]
pub fn wave_series(n: usize) -> BarSeries {
    BarSeries::new(wave_bars(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_handles_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(approx_eq(1.0, 1.0 + 1e-12, EPSILON));
    }

    #[test]
    fn test_verify_nan_prefix() {
        assert!(verify_nan_prefix(&[f64::NAN, f64::NAN, 1.0], 2));
        assert!(!verify_nan_prefix(&[f64::NAN, 1.0, f64::NAN], 1));
    }

    #[test]
    fn test_wave_bars_are_well_formed() {
        for bar in wave_bars(500) {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.volume > 0.0);
        }
    }
}
