//! Moving Average Convergence Divergence.
//!
//! Three related lines derived from two EMAs of the close:
//!
//! - macd line: fast EMA minus slow EMA, defined from index `slow - 1`
//! - signal line: EMA of the macd line, defined after a further
//!   `signal - 1` defined macd points
//! - histogram: macd line minus signal line
//!
//! Slots before each line's warm-up end are absent, never zero.

use crate::error::{Error, Result};
use crate::indicators::ema::ema;
use crate::output::IndicatorSeries;
use crate::series::{PriceSeries, PriceSource};
use crate::traits::{validate_window, validate_windowed_input, SeriesElement};

/// Number of leading undefined slots in the macd line.
#[inline]
#[must_use]
pub const fn macd_line_lookback(slow_window: usize) -> usize {
    if slow_window == 0 {
        0
    } else {
        slow_window - 1
    }
}

/// Number of leading undefined slots in the signal line and histogram.
#[inline]
#[must_use]
pub const fn macd_signal_lookback(slow_window: usize, signal_window: usize) -> usize {
    macd_line_lookback(slow_window) + signal_window - 1
}

/// Smallest input length producing at least one defined macd value.
#[inline]
#[must_use]
pub const fn macd_min_len(slow_window: usize) -> usize {
    slow_window
}

/// The three MACD component slices for a data slice input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// Fast EMA minus slow EMA.
    pub macd_line: Vec<Option<T>>,
    /// EMA of the macd line.
    pub signal_line: Vec<Option<T>>,
    /// Macd line minus signal line.
    pub histogram: Vec<Option<T>>,
}

/// The three MACD components aligned to the input series timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    /// Fast EMA minus slow EMA.
    pub macd: IndicatorSeries,
    /// EMA of the macd line.
    pub signal: IndicatorSeries,
    /// Macd minus signal.
    pub histogram: IndicatorSeries,
}

/// MACD configuration with the conventional 12/26/9 defaults.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use market_metrics::{Bar, Macd, PriceSeries};
///
/// let bars: Vec<Bar> = (0..40)
///     .map(|i| {
///         let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
///             + chrono::Duration::days(i);
///         let price = 100.0 + i as f64;
///         Bar::new(ts, price, price, price, price, 1_000).unwrap()
///     })
///     .collect();
/// let series = PriceSeries::new(bars).unwrap();
///
/// let result = Macd::new().compute(&series).unwrap();
/// assert_eq!(result.macd.value_at(24), None);
/// assert!(result.macd.value_at(25).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl Macd {
    /// Creates a configuration with the standard 12/26/9 windows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA window.
    #[must_use]
    pub const fn fast(mut self, window: usize) -> Self {
        self.fast = window;
        self
    }

    /// Sets the slow EMA window.
    #[must_use]
    pub const fn slow(mut self, window: usize) -> Self {
        self.slow = window;
        self
    }

    /// Sets the signal line EMA window.
    #[must_use]
    pub const fn signal(mut self, window: usize) -> Self {
        self.signal = window;
        self
    }

    /// Computes all three components over the series closes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`macd`].
    pub fn compute(&self, series: &PriceSeries) -> Result<MacdSeries> {
        let output = macd(
            &series.extract(PriceSource::Close),
            self.fast,
            self.slow,
            self.signal,
        )?;
        let timestamps = series.timestamps();
        Ok(MacdSeries {
            macd: IndicatorSeries::from_parts(timestamps.clone(), output.macd_line)?,
            signal: IndicatorSeries::from_parts(timestamps.clone(), output.signal_line)?,
            histogram: IndicatorSeries::from_parts(timestamps, output.histogram)?,
        })
    }
}

/// Computes MACD components for a data slice.
///
/// If the input holds fewer than `signal_window` defined macd points, the
/// signal line and histogram come back with zero defined points; the macd
/// line itself is defined from index `slow_window - 1`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if any window is zero, if
/// `fast_window >= slow_window` (equal windows would make the macd line
/// identically zero), or if `slow_window` exceeds the input length;
/// [`Error::InsufficientData`] if the input is empty.
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
) -> Result<MacdOutput<T>> {
    validate_window(fast_window)?;
    validate_window(signal_window)?;
    if fast_window >= slow_window {
        return Err(Error::InvalidParameter {
            reason: format!(
                "fast window {fast_window} must be smaller than slow window {slow_window}"
            ),
        });
    }
    validate_windowed_input(data, slow_window, macd_min_len(slow_window), "macd")?;

    let n = data.len();
    let fast_ema = ema(data, fast_window)?;
    let slow_ema = ema(data, slow_window)?;

    let mut macd_line = vec![None; n];
    for i in 0..n {
        if let (Some(fast), Some(slow)) = (fast_ema[i], slow_ema[i]) {
            macd_line[i] = Some(fast - slow);
        }
    }

    // Signal line: EMA over the defined suffix of the macd line,
    // scattered back to full-length alignment.
    let first_defined = slow_window - 1;
    let dense: Vec<T> = macd_line[first_defined..].iter().copied().flatten().collect();
    let mut signal_line = vec![None; n];
    if dense.len() >= signal_window {
        for (offset, value) in ema(&dense, signal_window)?.into_iter().enumerate() {
            signal_line[first_defined + offset] = value;
        }
    }

    let mut histogram = vec![None; n];
    for i in 0..n {
        if let (Some(line), Some(signal)) = (macd_line[i], signal_line[i]) {
            histogram[i] = Some(line - signal);
        }
    }

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}
