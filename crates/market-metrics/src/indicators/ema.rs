//! Exponential Moving Average.
//!
//! Weights recent values more heavily than a simple mean. The first
//! defined slot at index `window - 1` is seeded with the SMA of the
//! initial window; every later slot applies
//! `ema[i] = value[i] * k + ema[i-1] * (1 - k)` with `k = 2 / (window + 1)`.
//! Single pass, O(n), deterministic.

use crate::error::Result;
use crate::output::IndicatorSeries;
use crate::series::{PriceSeries, PriceSource};
use crate::traits::{validate_windowed_input, SeriesElement};

/// Number of leading undefined slots in EMA output.
#[inline]
#[must_use]
pub const fn ema_lookback(window: usize) -> usize {
    if window == 0 {
        0
    } else {
        window - 1
    }
}

/// Smallest input length producing at least one defined EMA value.
#[inline]
#[must_use]
pub const fn ema_min_len(window: usize) -> usize {
    window
}

/// Computes the Exponential Moving Average of a data slice.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `window` is zero or exceeds the input length, and
/// [`Error::InsufficientData`](crate::Error::InsufficientData) if the
/// input is empty.
///
/// # Example
///
/// ```
/// use market_metrics::indicators::ema;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let result = ema(&data, 3).unwrap();
///
/// assert_eq!(result[1], None);
/// assert_eq!(result[2], Some(2.0)); // SMA seed
/// assert_eq!(result[3], Some(3.0)); // 4*0.5 + 2*0.5
/// assert_eq!(result[4], Some(4.0));
/// ```
pub fn ema<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<Option<T>>> {
    validate_windowed_input(data, window, ema_min_len(window), "ema")?;

    let window_t = T::from_usize(window)?;
    let alpha = T::two() / (window_t + T::one());
    let mut result = vec![None; data.len()];

    let mut sum = T::zero();
    for &value in &data[..window] {
        sum = sum + value;
    }
    let mut prev = sum / window_t;
    result[window - 1] = Some(prev);

    for i in window..data.len() {
        prev = data[i] * alpha + prev * (T::one() - alpha);
        result[i] = Some(prev);
    }

    Ok(result)
}

/// Exponential moving average of closing prices, aligned to the series
/// timestamps.
///
/// # Errors
///
/// Same conditions as [`ema`].
pub fn exponential_moving_average(series: &PriceSeries, window: usize) -> Result<IndicatorSeries> {
    let values = ema(&series.extract(PriceSource::Close), window)?;
    IndicatorSeries::from_parts(series.timestamps(), values)
}
