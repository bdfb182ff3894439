//! Runs the full indicator stack over a synthetic price history and
//! prints what a charting frontend would consume.

use chrono::{Duration, TimeZone, Utc};

use market_metrics::indicators::{
    annualized_volatility, daily_volatility, price_summary, relative_strength_index, Bollinger,
    Macd,
};
use market_metrics::{
    fibonacci_retracement, sma_crossovers, Bar, PriceSeries, Result, Trend,
};

fn synthetic_series(days: usize) -> Result<PriceSeries> {
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let mut bars = Vec::with_capacity(days);
    let mut close = 100.0;
    for i in 0..days {
        let open = close;
        close = 100.0 + (i as f64 / 9.0).sin() * 12.0 + i as f64 * 0.05;
        let high = open.max(close) + 0.8;
        let low = open.min(close) - 0.6;
        let volume = 900_000 + (i as u64) * 4_000;
        bars.push(Bar::new(
            start + Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume,
        )?);
    }
    PriceSeries::new(bars)
}

fn main() -> Result<()> {
    let series = synthetic_series(400)?;

    let summary = price_summary(&series)?;
    println!(
        "closes: min {:.2}  mean {:.2}  max {:.2}",
        summary.min_close, summary.mean_close, summary.max_close
    );

    let daily = daily_volatility(&series)?;
    match annualized_volatility(&series)? {
        Some(annual) => println!(
            "volatility: daily {:.2}%  annual {:.2}%",
            daily * 100.0,
            annual * 100.0
        ),
        None => println!("volatility: daily {:.2}%  (range too short to annualize)", daily * 100.0),
    }

    let rsi = relative_strength_index(&series, 14)?;
    if let Some(value) = rsi.last_value() {
        println!("rsi(14): {value:.1}");
    }

    let bands = Bollinger::new().compute(&series)?;
    let last = series.len() - 1;
    println!(
        "bollinger(20, 2.0): lower {:.2}  middle {:.2}  upper {:.2}",
        bands.lower.value_at(last).unwrap(),
        bands.middle.value_at(last).unwrap(),
        bands.upper.value_at(last).unwrap(),
    );

    let macd = Macd::new().compute(&series)?;
    println!(
        "macd(12/26/9): line {:+.3}  signal {:+.3}  histogram {:+.3}",
        macd.macd.last_value().unwrap(),
        macd.signal.last_value().unwrap(),
        macd.histogram.last_value().unwrap(),
    );

    println!("sma crossovers (50 vs 200):");
    for event in sma_crossovers(&series, 50, 200)? {
        println!(
            "  {}  {:?}  short {:.2} long {:.2}",
            event.timestamp.date_naive(),
            event.kind,
            event.short_value,
            event.long_value
        );
    }

    let levels = fibonacci_retracement(&series, 0..series.len(), Trend::Uptrend)?;
    println!(
        "fibonacci retracement of {:.2} -> {:.2}:",
        levels.low, levels.high
    );
    for level in levels.levels() {
        println!("  {:>5.1}%  {:.2}", level.ratio * 100.0, level.price);
    }

    Ok(())
}
