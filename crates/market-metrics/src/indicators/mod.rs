//! Technical indicator modules.
//!
//! Every indicator comes in two layers:
//!
//! - a generic slice kernel (`sma`, `ema`, `rsi`, `macd`, `bollinger`)
//!   over `&[T]` for any [`SeriesElement`](crate::SeriesElement),
//!   returning full-length `Vec<Option<T>>` output
//! - a [`PriceSeries`](crate::PriceSeries)-level function returning a
//!   timestamp-aligned [`IndicatorSeries`](crate::IndicatorSeries)
//!
//! Shared properties: single pass, O(n), no mutation of the input, and a
//! tagged absent state for warm-up slots. The `*_lookback` and
//! `*_min_len` helpers report each indicator's warm-up length and the
//! smallest input that produces a defined value.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod statistics;

pub use bollinger::{
    bollinger, bollinger_lookback, bollinger_min_len, Bollinger, BollingerOutput, BollingerSeries,
};
pub use ema::{ema, ema_lookback, ema_min_len, exponential_moving_average};
pub use macd::{
    macd, macd_line_lookback, macd_min_len, macd_signal_lookback, Macd, MacdOutput, MacdSeries,
};
pub use rsi::{
    relative_strength_index, rsi, rsi_lookback, rsi_min_len, DEFAULT_RSI_WINDOW,
};
pub use sma::{moving_average, simple_moving_average, sma, sma_lookback, sma_min_len};
pub use statistics::{
    annualized_volatility, daily_volatility, price_summary, PriceSummary,
    ANNUALIZATION_MIN_SPAN_DAYS, TRADING_DAYS_PER_YEAR,
};
