//! Bollinger Bands.
//!
//! A volatility envelope around a simple moving average: the middle band
//! is the SMA of the close, the upper and lower bands sit `k` population
//! standard deviations above and below it. Population standard deviation
//! (divide by n) matches TA-Lib and the major charting platforms.
//!
//! The rolling sum and sum-of-squares make the whole computation O(n).
//! The variance subtraction can go fractionally negative through
//! floating-point rounding on near-constant windows, so it is clamped at
//! zero before the square root.

use crate::error::{Error, Result};
use crate::output::IndicatorSeries;
use crate::series::{PriceSeries, PriceSource};
use crate::traits::{validate_windowed_input, SeriesElement};

/// Number of leading undefined slots in Bollinger output.
#[inline]
#[must_use]
pub const fn bollinger_lookback(window: usize) -> usize {
    if window == 0 {
        0
    } else {
        window - 1
    }
}

/// Smallest input length producing at least one defined band value.
#[inline]
#[must_use]
pub const fn bollinger_min_len(window: usize) -> usize {
    window
}

/// The three band slices for a data slice input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// Simple moving average of the input.
    pub middle: Vec<Option<T>>,
    /// Middle band plus `k` standard deviations.
    pub upper: Vec<Option<T>>,
    /// Middle band minus `k` standard deviations.
    pub lower: Vec<Option<T>>,
}

/// The three bands aligned to the input series timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    /// Simple moving average of the close.
    pub middle: IndicatorSeries,
    /// Middle band plus `k` standard deviations.
    pub upper: IndicatorSeries,
    /// Middle band minus `k` standard deviations.
    pub lower: IndicatorSeries,
}

/// Bollinger Bands configuration with the conventional 20-bar window and
/// 2.0 multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    window: usize,
    multiplier: f64,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            window: 20,
            multiplier: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a configuration with the standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rolling window.
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the standard deviation multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Computes the bands over the series closes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`bollinger`].
    pub fn compute(&self, series: &PriceSeries) -> Result<BollingerSeries> {
        let output = bollinger(
            &series.extract(PriceSource::Close),
            self.window,
            self.multiplier,
        )?;
        let timestamps = series.timestamps();
        Ok(BollingerSeries {
            middle: IndicatorSeries::from_parts(timestamps.clone(), output.middle)?,
            upper: IndicatorSeries::from_parts(timestamps.clone(), output.upper)?,
            lower: IndicatorSeries::from_parts(timestamps, output.lower)?,
        })
    }
}

/// Computes Bollinger Bands for a data slice.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `window` is below 2 or exceeds
/// the input length, or if `multiplier` is not strictly positive;
/// [`Error::InsufficientData`] if the input is empty.
///
/// # Example
///
/// ```
/// use market_metrics::indicators::bollinger;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let bands = bollinger(&data, 3, 2.0).unwrap();
///
/// assert_eq!(bands.middle[1], None);
/// assert_eq!(bands.middle[2], Some(2.0));
/// assert!(bands.upper[2].unwrap() > bands.lower[2].unwrap());
/// ```
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    window: usize,
    multiplier: T,
) -> Result<BollingerOutput<T>> {
    if window < 2 {
        return Err(Error::InvalidParameter {
            reason: format!("bollinger window {window} must be at least 2"),
        });
    }
    if !(multiplier > T::zero()) {
        return Err(Error::InvalidParameter {
            reason: "bollinger multiplier must be strictly positive".into(),
        });
    }
    validate_windowed_input(data, window, bollinger_min_len(window), "bollinger")?;

    let n = data.len();
    let window_t = T::from_usize(window)?;
    let mut middle = vec![None; n];
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    let mut sum = T::zero();
    let mut sum_sq = T::zero();
    for &value in &data[..window] {
        sum = sum + value;
        sum_sq = sum_sq + value * value;
    }

    let mut write_bands = |i: usize, sum: T, sum_sq: T| {
        let mean = sum / window_t;
        let std_dev = population_variance(sum_sq, sum, window_t).sqrt();
        middle[i] = Some(mean);
        upper[i] = Some(mean + multiplier * std_dev);
        lower[i] = Some(mean - multiplier * std_dev);
    };

    write_bands(window - 1, sum, sum_sq);
    for i in window..n {
        let newest = data[i];
        let oldest = data[i - window];
        sum = sum + newest - oldest;
        sum_sq = sum_sq + newest * newest - oldest * oldest;
        write_bands(i, sum, sum_sq);
    }

    Ok(BollingerOutput {
        middle,
        upper,
        lower,
    })
}

/// Population variance from rolling sums: `sum_sq/n - (sum/n)^2`,
/// clamped at zero against rounding.
#[inline]
fn population_variance<T: SeriesElement>(sum_sq: T, sum: T, window: T) -> T {
    let mean = sum / window;
    let variance = sum_sq / window - mean * mean;
    if variance < T::zero() {
        T::zero()
    } else {
        variance
    }
}
