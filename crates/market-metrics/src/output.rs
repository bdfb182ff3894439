//! Timestamp-aligned indicator output.
//!
//! Warm-up gaps are a tagged absent state, never a sentinel number:
//! callers can always tell "no value yet" from "value is zero". Each
//! output slot lines up with the input bar at the same index.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// An indicator output aligned one-to-one with the bars of the input
/// [`PriceSeries`](crate::PriceSeries).
///
/// The first `lookback` slots of a windowed indicator hold `None`
/// because insufficient history exists; defined values form a suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries<T = f64> {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<Option<T>>,
}

impl<T: SeriesElement> IndicatorSeries<T> {
    /// Builds a series from parallel timestamp and value vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MisalignedSeries`] if the vectors differ in
    /// length.
    pub fn from_parts(timestamps: Vec<DateTime<Utc>>, values: Vec<Option<T>>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(Error::MisalignedSeries {
                reason: format!(
                    "{} timestamps but {} values",
                    timestamps.len(),
                    values.len()
                ),
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Number of slots (equal to the input series length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The timestamps, one per slot.
    #[must_use]
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// The values, one per slot; `None` marks warm-up.
    #[must_use]
    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    /// The value at `index`, or `None` while warming up or out of range.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<T> {
        self.values.get(index).copied().flatten()
    }

    /// Index of the first defined value, if any exists.
    #[must_use]
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    /// Number of defined values.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// The most recent defined value, if any.
    #[must_use]
    pub fn last_value(&self) -> Option<T> {
        self.values.iter().rev().find_map(|v| *v)
    }

    /// Iterates over `(timestamp, value)` slots in time order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, Option<T>)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Iterates over only the defined `(timestamp, value)` points.
    pub fn iter_defined(&self) -> impl Iterator<Item = (DateTime<Utc>, T)> + '_ {
        self.iter()
            .filter_map(|(ts, value)| value.map(|v| (ts, v)))
    }
}
