//! Simple Moving Average.
//!
//! The arithmetic mean of the last `window` values, maintained with an
//! O(n) rolling sum: the initial window is summed once, then each step
//! adds the newest value and subtracts the oldest.

use crate::error::Result;
use crate::output::IndicatorSeries;
use crate::series::{PriceSeries, PriceSource};
use crate::traits::{validate_windowed_input, SeriesElement};

/// Number of leading undefined slots in SMA output.
#[inline]
#[must_use]
pub const fn sma_lookback(window: usize) -> usize {
    if window == 0 {
        0
    } else {
        window - 1
    }
}

/// Smallest input length producing at least one defined SMA value.
#[inline]
#[must_use]
pub const fn sma_min_len(window: usize) -> usize {
    window
}

/// Computes the Simple Moving Average of a data slice.
///
/// Slots before index `window - 1` are `None`; from there on each slot
/// holds the mean of the trailing `window` values.
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
/// use market_metrics::indicators::sma;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let result = sma(&data, 3).unwrap();
///
/// assert_eq!(result[0], None);
/// assert_eq!(result[1], None);
/// assert_eq!(result[2], Some(2.0)); // (1+2+3)/3
/// assert_eq!(result[3], Some(3.0)); // (2+3+4)/3
/// assert_eq!(result[4], Some(4.0)); // (3+4+5)/3
/// ```
pub fn sma<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<Option<T>>> {
    validate_windowed_input(data, window, sma_min_len(window), "sma")?;

    let window_t = T::from_usize(window)?;
    let mut result = vec![None; data.len()];

    let mut sum = T::zero();
    for &value in &data[..window] {
        sum = sum + value;
    }
    result[window - 1] = Some(sum / window_t);

    for i in window..data.len() {
        sum = sum + data[i] - data[i - window];
        result[i] = Some(sum / window_t);
    }

    Ok(result)
}

/// Simple moving average of closing prices, aligned to the series
/// timestamps.
///
/// # Errors
///
/// Same conditions as [`sma`].
pub fn simple_moving_average(series: &PriceSeries, window: usize) -> Result<IndicatorSeries> {
    moving_average(series, PriceSource::Close, window)
}

/// Simple moving average over any [`PriceSource`], e.g.
/// `PriceSource::Volume` for a volume moving average.
///
/// # Errors
///
/// Same conditions as [`sma`].
pub fn moving_average(
    series: &PriceSeries,
    source: PriceSource,
    window: usize,
) -> Result<IndicatorSeries> {
    let values = sma(&series.extract(source), window)?;
    IndicatorSeries::from_parts(series.timestamps(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, undefined_prefix, EPSILON};

    #[test]
    fn basic_window_means() {
        let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
        let result = sma(&data, 3).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(undefined_prefix(&result), 2);
        assert!(approx_eq(result[2].unwrap(), 11.0, EPSILON));
        assert!(approx_eq(result[3].unwrap(), 12.0, EPSILON));
        assert!(approx_eq(result[4].unwrap(), 13.0, EPSILON));
    }

    #[test]
    fn window_one_echoes_input() {
        let data = vec![5.0_f64, 7.0, 9.0];
        let result = sma(&data, 1).unwrap();
        assert_eq!(result, vec![Some(5.0), Some(7.0), Some(9.0)]);
    }

    #[test]
    fn window_equal_to_length_yields_single_value() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let result = sma(&data, 3).unwrap();
        assert_eq!(undefined_prefix(&result), 2);
        assert!(approx_eq(result[2].unwrap(), 2.0, EPSILON));
    }

    #[test]
    fn matches_brute_force_reference() {
        let data: Vec<f64> = (0..40).map(|i| f64::from(i).sin() * 10.0 + 50.0).collect();
        let window = 7;
        let result = sma(&data, window).unwrap();

        for i in (window - 1)..data.len() {
            let mean: f64 =
                data[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            assert!(
                approx_eq(result[i].unwrap(), mean, EPSILON),
                "mismatch at {i}"
            );
        }
    }

    #[test]
    fn f32_input() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0];
        let result = sma(&data, 2).unwrap();
        assert!(approx_eq(result[1].unwrap(), 1.5_f32, 1e-5));
    }

    #[test]
    fn zero_window_rejected() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            sma(&data, 0),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn oversized_window_rejected() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            sma(&data, 3),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn empty_input_rejected() {
        let data: Vec<f64> = vec![];
        assert_eq!(
            sma(&data, 3),
            Err(Error::InsufficientData {
                required: 3,
                actual: 0,
                indicator: "sma",
            })
        );
    }

    #[test]
    fn lookback_helpers() {
        assert_eq!(sma_lookback(20), 19);
        assert_eq!(sma_min_len(20), 20);
        assert_eq!(sma_lookback(0), 0);
    }
}
