//! End-to-end run over a fixture of daily OHLCV bars: every module is
//! exercised against the same series and cross-checked for consistency.

use chrono::NaiveDate;
use serde::Deserialize;

use market_metrics::indicators::{
    annualized_volatility, daily_volatility, moving_average, price_summary,
    relative_strength_index, simple_moving_average, Bollinger, Macd,
};
use market_metrics::{
    detect_crossovers, fibonacci_retracement, sma_crossovers, Bar, PriceSeries, PriceSource, Trend,
};

#[derive(Debug, Deserialize)]
struct FixtureRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

fn load_fixture() -> PriceSeries {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/daily_ohlcv.csv"
    );
    let mut reader = csv::Reader::from_path(path).expect("fixture readable");
    let bars: Vec<Bar> = reader
        .deserialize()
        .map(|row| {
            let row: FixtureRow = row.expect("fixture row parses");
            let timestamp = row.date.and_hms_opt(0, 0, 0).unwrap().and_utc();
            Bar::new(timestamp, row.open, row.high, row.low, row.close, row.volume)
                .expect("fixture bar satisfies ohlc invariant")
        })
        .collect();
    PriceSeries::new(bars).expect("fixture dates strictly ascending")
}

#[test]
fn fixture_loads_sixty_trading_days() {
    let series = load_fixture();
    assert_eq!(series.len(), 60);
    assert!(series.span_days() < 365);
}

#[test]
fn moving_averages_over_fixture() {
    let series = load_fixture();

    let sma20 = simple_moving_average(&series, 20).unwrap();
    assert_eq!(sma20.len(), 60);
    assert_eq!(sma20.first_defined(), Some(19));
    assert_eq!(sma20.defined_count(), 41);

    // A volume moving average rides the same machinery through the
    // source selector; fixture volume grows monotonically.
    let volume_ma = moving_average(&series, PriceSource::Volume, 5).unwrap();
    let defined: Vec<f64> = volume_ma.iter_defined().map(|(_, v)| v).collect();
    assert_eq!(defined.len(), 56);
    for pair in defined.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn rsi_over_fixture_stays_bounded() {
    let series = load_fixture();
    let rsi = relative_strength_index(&series, 14).unwrap();
    assert_eq!(rsi.first_defined(), Some(14));
    for (_, value) in rsi.iter_defined() {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn macd_over_fixture_is_internally_consistent() {
    let series = load_fixture();
    let result = Macd::new().compute(&series).unwrap();

    assert_eq!(result.macd.first_defined(), Some(25));
    assert_eq!(result.signal.first_defined(), Some(33));
    assert_eq!(result.histogram.first_defined(), Some(33));

    for i in 0..series.len() {
        if let (Some(line), Some(signal)) =
            (result.macd.value_at(i), result.signal.value_at(i))
        {
            let hist = result.histogram.value_at(i).unwrap();
            assert!((hist - (line - signal)).abs() < 1e-9);
        }
    }
}

#[test]
fn bollinger_over_fixture_matches_brute_force() {
    let series = load_fixture();
    let bands = Bollinger::new().compute(&series).unwrap();
    let closes = series.closes();
    let window = 20;

    for i in (window - 1)..closes.len() {
        let slice = &closes[i + 1 - window..=i];
        let mean: f64 = slice.iter().sum::<f64>() / window as f64;
        let variance: f64 =
            slice.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window as f64;
        let std_dev = variance.sqrt();

        assert!((bands.middle.value_at(i).unwrap() - mean).abs() < 1e-9);
        assert!((bands.upper.value_at(i).unwrap() - (mean + 2.0 * std_dev)).abs() < 1e-9);
        assert!((bands.lower.value_at(i).unwrap() - (mean - 2.0 * std_dev)).abs() < 1e-9);
    }
}

#[test]
fn crossover_convenience_matches_manual_detection() {
    let series = load_fixture();

    let events = sma_crossovers(&series, 5, 20).unwrap();
    let short = simple_moving_average(&series, 5).unwrap();
    let long = simple_moving_average(&series, 20).unwrap();
    let manual = detect_crossovers(&short, &long).unwrap();

    assert_eq!(events, manual);
    for pair in events.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
        assert_ne!(pair[0].kind, pair[1].kind);
    }
}

#[test]
fn volatility_over_fixture() {
    let series = load_fixture();
    let daily = daily_volatility(&series).unwrap();
    assert!(daily > 0.0);
    // Sixty trading days span well under a year: annualization declines.
    assert_eq!(annualized_volatility(&series).unwrap(), None);
}

#[test]
fn summary_and_retracement_agree_on_extremes() {
    let series = load_fixture();
    let summary = price_summary(&series).unwrap();
    assert!(summary.min_close < summary.mean_close);
    assert!(summary.mean_close < summary.max_close);
    // The wave shape tops out at the same rounded close twice.
    assert_eq!(summary.max_timestamps.len(), 2);

    let levels = fibonacci_retracement(&series, 0..series.len(), Trend::Uptrend).unwrap();
    // Range extremes bracket every close.
    assert!(levels.high >= summary.max_close);
    assert!(levels.low <= summary.min_close);

    // The last close classifies consistently against the level ladder.
    let last_close = series.bars().last().unwrap().close;
    let signals = levels.classify(last_close);
    assert_eq!(signals.len(), 7);
}
