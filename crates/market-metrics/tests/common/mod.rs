//! Shared helpers for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use market_metrics::{Bar, PriceSeries};

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for accumulated floating-point results.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality within an absolute tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Timestamp of the synthetic trading day `offset` days after the base
/// date used by all test series.
#[allow(dead_code)]
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap() + Duration::days(offset)
}

/// Builds a daily series of flat bars from closing prices.
#[allow(dead_code)]
pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::new(day(i as i64), close, close, close, close, 1_000).unwrap())
        .collect();
    PriceSeries::new(bars).unwrap()
}

/// Builds a daily series from `(open, high, low, close)` tuples.
#[allow(dead_code)]
pub fn series_from_ohlc(bars: &[(f64, f64, f64, f64)]) -> PriceSeries {
    let bars = bars
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            Bar::new(day(i as i64), open, high, low, close, 1_000).unwrap()
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}
