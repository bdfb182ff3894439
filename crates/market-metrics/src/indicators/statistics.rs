//! Whole-series price statistics.
//!
//! One-shot descriptive numbers for chart annotation: closing price
//! extremes with the timestamps they occurred at, the mean close, and
//! close-to-close volatility. Unlike the rolling indicators these return
//! scalars, so a series too short to produce them is an error rather
//! than an empty output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::PriceSeries;

/// Trading days per year used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Minimum calendar span, in days, for annualized volatility to be
/// meaningful.
pub const ANNUALIZATION_MIN_SPAN_DAYS: i64 = 365;

/// Closing price extremes and mean over a whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Highest close in the series.
    pub max_close: f64,
    /// Lowest close in the series.
    pub min_close: f64,
    /// Arithmetic mean of all closes.
    pub mean_close: f64,
    /// Timestamps of every bar closing at the maximum.
    pub max_timestamps: Vec<DateTime<Utc>>,
    /// Timestamps of every bar closing at the minimum.
    pub min_timestamps: Vec<DateTime<Utc>>,
}

/// Computes closing price extremes and mean.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the series is empty.
pub fn price_summary(series: &PriceSeries) -> Result<PriceSummary> {
    if series.is_empty() {
        return Err(Error::InsufficientData {
            required: 1,
            actual: 0,
            indicator: "price_summary",
        });
    }

    let mut max_close = f64::MIN;
    let mut min_close = f64::MAX;
    let mut sum = 0.0;
    for bar in series.bars() {
        max_close = max_close.max(bar.close);
        min_close = min_close.min(bar.close);
        sum += bar.close;
    }

    let at_close = |target: f64| -> Vec<DateTime<Utc>> {
        series
            .bars()
            .iter()
            .filter(|bar| bar.close == target)
            .map(|bar| bar.timestamp)
            .collect()
    };

    Ok(PriceSummary {
        max_close,
        min_close,
        mean_close: sum / series.len() as f64,
        max_timestamps: at_close(max_close),
        min_timestamps: at_close(min_close),
    })
}

/// Daily volatility: the sample standard deviation of close-to-close
/// percent changes.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] for fewer than three bars (two
/// returns are the minimum for a sample deviation) and
/// [`Error::InvalidParameter`] if any close used as a change base is
/// zero.
pub fn daily_volatility(series: &PriceSeries) -> Result<f64> {
    if series.len() < 3 {
        return Err(Error::InsufficientData {
            required: 3,
            actual: series.len(),
            indicator: "daily_volatility",
        });
    }

    let closes = series.closes();
    let mut returns = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        if pair[0] == 0.0 {
            return Err(Error::InvalidParameter {
                reason: "volatility requires non-zero closes".into(),
            });
        }
        returns.push(pair[1] / pair[0] - 1.0);
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / (n - 1.0);
    Ok(variance.sqrt())
}

/// Annualized volatility: daily volatility scaled by the square root of
/// the trading days per year.
///
/// Returns `None` when the series spans less than a calendar year, where
/// annualization would overstate the number.
///
/// # Errors
///
/// Same conditions as [`daily_volatility`].
pub fn annualized_volatility(series: &PriceSeries) -> Result<Option<f64>> {
    let daily = daily_volatility(series)?;
    if series.span_days() < ANNUALIZATION_MIN_SPAN_DAYS {
        return Ok(None);
    }
    Ok(Some(daily * TRADING_DAYS_PER_YEAR.sqrt()))
}
