//! market-metrics: technical indicator computation over historical
//! stock price series.
//!
//! The caller supplies an immutable [`PriceSeries`] of OHLCV bars; each
//! indicator is a pure function of its inputs producing a
//! timestamp-aligned [`IndicatorSeries`] whose warm-up slots are a
//! tagged absent state, never zero and never NaN. Independent indicator
//! calls on the same series may run on separate threads with no
//! coordination.
//!
//! Fetching bars from a market-data provider, plotting, and the process
//! entry point are collaborator concerns outside this crate.
//!
//! # Quick start
//!
//! ```
//! use market_metrics::indicators::sma;
//!
//! let closes = vec![10.0_f64, 11.0, 12.0, 11.0, 10.0];
//! let result = sma(&closes, 3).unwrap();
//!
//! // Two warm-up slots, then defined values.
//! assert_eq!(result[1], None);
//! assert_eq!(result[2], Some(11.0));
//! ```
//!
//! # Modules
//!
//! - [`indicators`]: SMA, EMA, RSI, MACD, Bollinger Bands, and series
//!   statistics
//! - [`crossover`]: golden cross / death cross detection between two
//!   aligned series
//! - [`retracement`]: one-shot Fibonacci retracement levels
//!
//! # Error handling
//!
//! Every fallible operation returns [`Result`] with a structured
//! [`Error`]; failures are raised before any output is produced.
//!
//! ```
//! use market_metrics::indicators::sma;
//!
//! let short = vec![1.0_f64, 2.0];
//! assert!(sma(&short, 10).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod crossover;
pub mod error;
pub mod indicators;
pub mod output;
pub mod prelude;
pub mod retracement;
pub mod series;
pub mod traits;
pub mod utils;

pub use crate::crossover::{detect_crossovers, sma_crossovers, CrossoverEvent, CrossoverKind};
pub use crate::error::{Error, Result};
pub use crate::indicators::{Bollinger, Macd};
pub use crate::output::IndicatorSeries;
pub use crate::retracement::{fibonacci_retracement, RetracementLevels, Trend};
pub use crate::series::{Bar, PriceSeries, PriceSource};
pub use crate::traits::SeriesElement;
