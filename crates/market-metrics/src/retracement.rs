//! Fibonacci retracement levels.
//!
//! A one-shot calculation, not a rolling series: pick a window of bars,
//! take its highest high and lowest low, and project the fixed ratio set
//! between them. In an uptrend (low made before the high) levels measure
//! pullbacks down from the high; in a downtrend they measure bounces up
//! from the low.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::PriceSeries;

/// The conventional retracement ratio set, in ascending order.
pub const RETRACEMENT_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// Direction of the move the retracement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// The low precedes the high; levels step down from the high.
    Uptrend,
    /// The high precedes the low; levels step up from the low.
    Downtrend,
}

/// A single ratio and the price it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetracementLevel {
    /// Retracement ratio in [0, 1].
    pub ratio: f64,
    /// Price at this ratio.
    pub price: f64,
}

/// Which side of a level a price sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelSide {
    /// Price is above the level.
    Above,
    /// Price is below the level.
    Below,
    /// Price is exactly at the level.
    At,
}

/// A level together with a price's position relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSignal {
    /// The level being compared against.
    pub level: RetracementLevel,
    /// Side of the level the queried price is on.
    pub side: LevelSide,
}

/// The full retracement level set for one extremum pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetracementLevels {
    /// Highest high in the examined range.
    pub high: f64,
    /// Lowest low in the examined range.
    pub low: f64,
    /// Direction the levels were projected for.
    pub trend: Trend,
    levels: Vec<RetracementLevel>,
}

impl RetracementLevels {
    /// The levels in ascending ratio order.
    #[must_use]
    pub fn levels(&self) -> &[RetracementLevel] {
        &self.levels
    }

    /// Price at the given ratio, if it is one of
    /// [`RETRACEMENT_RATIOS`].
    #[must_use]
    pub fn price_at(&self, ratio: f64) -> Option<f64> {
        self.levels
            .iter()
            .find(|level| level.ratio == ratio)
            .map(|level| level.price)
    }

    /// Classifies a price against every level, e.g. the latest close for
    /// chart buy/sell annotations.
    #[must_use]
    pub fn classify(&self, price: f64) -> Vec<LevelSignal> {
        self.levels
            .iter()
            .map(|&level| {
                let side = if price > level.price {
                    LevelSide::Above
                } else if price < level.price {
                    LevelSide::Below
                } else {
                    LevelSide::At
                };
                LevelSignal { level, side }
            })
            .collect()
    }
}

/// Computes retracement levels over `range` (bar indices) of a series.
///
/// The highest `high` and lowest `low` fields within the range anchor the
/// projection: uptrend levels are `high - ratio * (high - low)`, downtrend
/// levels are `low + ratio * (high - low)`, so ratio 0 is always the near
/// extreme of the move and ratio 1 the far one.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the range is empty or falls
/// outside the series, and [`Error::DegenerateRange`] if the highest high
/// equals the lowest low (no distance to project across).
pub fn fibonacci_retracement(
    series: &PriceSeries,
    range: Range<usize>,
    trend: Trend,
) -> Result<RetracementLevels> {
    if range.is_empty() {
        return Err(Error::InvalidParameter {
            reason: "retracement range is empty".into(),
        });
    }
    if range.end > series.len() {
        return Err(Error::InvalidParameter {
            reason: format!(
                "retracement range {range:?} exceeds series length {len}",
                len = series.len()
            ),
        });
    }

    let bars = &series.bars()[range];
    let mut high = f64::MIN;
    let mut low = f64::MAX;
    for bar in bars {
        high = high.max(bar.high);
        low = low.min(bar.low);
    }
    if high == low {
        return Err(Error::DegenerateRange { high, low });
    }

    let span = high - low;
    let levels = RETRACEMENT_RATIOS
        .iter()
        .map(|&ratio| {
            let price = match trend {
                Trend::Uptrend => high - ratio * span,
                Trend::Downtrend => low + ratio * span,
            };
            RetracementLevel { ratio, price }
        })
        .collect();

    Ok(RetracementLevels {
        high,
        low,
        trend,
        levels,
    })
}
