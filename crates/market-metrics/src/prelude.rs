//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use market_metrics::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//! assert_eq!(result[2], Some(2.0));
//! ```

pub use crate::error::{Error, Result};

pub use crate::series::{Bar, PriceSeries, PriceSource};

pub use crate::output::IndicatorSeries;

pub use crate::traits::SeriesElement;

pub use crate::indicators::{
    annualized_volatility, bollinger, daily_volatility, ema, exponential_moving_average, macd,
    moving_average, price_summary, relative_strength_index, rsi, simple_moving_average, sma,
    Bollinger, BollingerOutput, BollingerSeries, Macd, MacdOutput, MacdSeries, PriceSummary,
};

pub use crate::crossover::{detect_crossovers, sma_crossovers, CrossoverEvent, CrossoverKind};

pub use crate::retracement::{
    fibonacci_retracement, LevelSide, LevelSignal, RetracementLevel, RetracementLevels, Trend,
    RETRACEMENT_RATIOS,
};
