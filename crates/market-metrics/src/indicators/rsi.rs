//! Relative Strength Index.
//!
//! A momentum oscillator over close-to-close changes, bounded to
//! [0, 100] by construction.
//!
//! Per-bar deltas are split into gains and losses; the first averages are
//! seeded with the simple mean of the first `window` deltas, after which
//! Wilder smoothing applies:
//! `avg[i] = (avg[i-1] * (window - 1) + value[i]) / window`.
//! `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`.
//!
//! Tie-break policy, applied deliberately rather than as a hidden special
//! case: when `avg_loss` is zero RSI is 100 (no division by zero), when
//! `avg_gain` is zero RSI is 0, and when both are zero (a flat market)
//! RSI is 50.

use crate::error::Result;
use crate::output::IndicatorSeries;
use crate::series::{PriceSeries, PriceSource};
use crate::traits::{validate_windowed_input, SeriesElement};

/// Conventional RSI window.
pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Number of leading undefined slots in RSI output.
///
/// A full `window`, one slot more than the moving averages need: the
/// seed averages consume `window` deltas, and the first delta itself
/// consumes a bar.
#[inline]
#[must_use]
pub const fn rsi_lookback(window: usize) -> usize {
    window
}

/// Smallest input length producing at least one defined RSI value.
#[inline]
#[must_use]
pub const fn rsi_min_len(window: usize) -> usize {
    window + 1
}

/// Computes the Relative Strength Index of a data slice.
///
/// Slots before index `window` are `None`. An input of exactly `window`
/// values is accepted and yields a series with zero defined points, since
/// one extra bar is needed for the first delta.
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
/// use market_metrics::indicators::rsi;
///
/// let data = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0];
/// let result = rsi(&data, 5).unwrap();
///
/// assert_eq!(result[4], None);
/// let first = result[5].unwrap();
/// assert!((0.0..=100.0).contains(&first));
/// ```
pub fn rsi<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<Option<T>>> {
    validate_windowed_input(data, window, rsi_min_len(window), "rsi")?;

    let mut result = vec![None; data.len()];
    if data.len() < window + 1 {
        // The window fits but no delta history does: zero defined points.
        return Ok(result);
    }

    let window_t = T::from_usize(window)?;
    let window_minus_one_t = T::from_usize(window - 1)?;
    let zero = T::zero();

    // Seed averages: simple mean of the first `window` deltas.
    let mut sum_gain = T::zero();
    let mut sum_loss = T::zero();
    for i in 1..=window {
        let delta = data[i] - data[i - 1];
        if delta > zero {
            sum_gain = sum_gain + delta;
        } else if delta < zero {
            sum_loss = sum_loss - delta;
        }
    }
    let mut avg_gain = sum_gain / window_t;
    let mut avg_loss = sum_loss / window_t;
    result[window] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder smoothing for the remainder.
    for i in (window + 1)..data.len() {
        let delta = data[i] - data[i - 1];
        let (gain, loss) = if delta > zero {
            (delta, zero)
        } else if delta < zero {
            (zero, -delta)
        } else {
            (zero, zero)
        };
        avg_gain = (avg_gain * window_minus_one_t + gain) / window_t;
        avg_loss = (avg_loss * window_minus_one_t + loss) / window_t;
        result[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(result)
}

/// RSI of closing prices, aligned to the series timestamps.
///
/// # Errors
///
/// Same conditions as [`rsi`].
pub fn relative_strength_index(series: &PriceSeries, window: usize) -> Result<IndicatorSeries> {
    let values = rsi(&series.extract(PriceSource::Close), window)?;
    IndicatorSeries::from_parts(series.timestamps(), values)
}

/// Converts smoothed averages into an RSI value in [0, 100].
#[inline]
fn rsi_from_averages<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    let zero = T::zero();
    if avg_loss == zero {
        if avg_gain == zero {
            // Flat market: neutral by policy.
            T::fifty()
        } else {
            T::hundred()
        }
    } else {
        let rs = avg_gain / avg_loss;
        T::hundred() - T::hundred() / (T::one() + rs)
    }
}
