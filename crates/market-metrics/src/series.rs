//! The OHLCV price series consumed by every indicator.
//!
//! A [`PriceSeries`] is constructed once from already-fetched data and is
//! immutable afterwards; indicator modules borrow it read-only. Fetching
//! bars from a market-data provider is a collaborator concern and happens
//! before this crate is involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One OHLCV observation for a fixed time interval.
///
/// Invariant, enforced by [`Bar::new`]:
/// `low <= min(open, close) <= max(open, close) <= high`, all prices
/// finite and non-negative. Serializes for downstream consumers;
/// construction from external data goes through [`Bar::new`] so the
/// invariant cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Bar open time.
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the bar.
    pub high: f64,
    /// Lowest price during the bar.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Trade volume during the bar.
    pub volume: u64,
}

impl Bar {
    /// Creates a bar, validating the OHLC ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBar`] if any price is non-finite or
    /// negative, or if `low <= min(open, close) <= max(open, close) <= high`
    /// does not hold.
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self> {
        for (name, value) in [("open", open), ("high", high), ("low", low), ("close", close)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidBar {
                    reason: format!("{name} price {value} is not a finite non-negative number"),
                });
            }
        }
        if low > open.min(close) || high < open.max(close) {
            return Err(Error::InvalidBar {
                reason: format!(
                    "ohlc ordering violated: open {open}, high {high}, low {low}, close {close}"
                ),
            });
        }
        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// The price field (or derived value) an indicator reads from each bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceSource {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Trade volume, as a float.
    Volume,
    /// Median price: `(high + low) / 2`.
    HL2,
    /// Typical price: `(high + low + close) / 3`.
    HLC3,
}

impl PriceSource {
    /// Extracts the configured value from a bar.
    #[inline]
    #[must_use]
    pub fn extract(self, bar: &Bar) -> f64 {
        match self {
            Self::Open => bar.open,
            Self::High => bar.high,
            Self::Low => bar.low,
            Self::Close => bar.close,
            Self::Volume => bar.volume as f64,
            Self::HL2 => (bar.high + bar.low) / 2.0,
            Self::HLC3 => (bar.high + bar.low + bar.close) / 3.0,
        }
    }
}

/// An ordered, time-ascending sequence of bars with no duplicate
/// timestamps.
///
/// Irregular spacing between bars is fine; indicators operate on sequence
/// position, not wall-clock distance. A new analysis run constructs a new
/// series rather than mutating an old one.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use market_metrics::{Bar, PriceSeries};
///
/// let bars: Vec<Bar> = (1..=5)
///     .map(|day| {
///         let ts = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
///         Bar::new(ts, 10.0, 11.0, 9.0, 10.5, 1_000).unwrap()
///     })
///     .collect();
/// let series = PriceSeries::new(bars).unwrap();
/// assert_eq!(series.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Creates a series from bars sorted strictly ascending by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonMonotonicTimestamps`] at the first bar whose
    /// timestamp does not strictly exceed its predecessor's (duplicates
    /// included).
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        for (index, pair) in bars.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(Error::NonMonotonicTimestamps { index: index + 1 });
            }
        }
        Ok(Self { bars })
    }

    /// Number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series contains no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, in time order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The bar at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Bar timestamps, in order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.bars.iter().map(|bar| bar.timestamp).collect()
    }

    /// Closing prices, in order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.extract(PriceSource::Close)
    }

    /// Extracts one value per bar for the given source.
    #[must_use]
    pub fn extract(&self, source: PriceSource) -> Vec<f64> {
        self.bars.iter().map(|bar| source.extract(bar)).collect()
    }

    /// Calendar days between the first and last bar, zero for series with
    /// fewer than two bars.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_days(),
            _ => 0,
        }
    }
}
