//! Error types for market-metrics.
//!
//! Every failure is raised synchronously before any output is produced;
//! no indicator call has side effects to roll back, so callers can simply
//! skip or abort on error.

use thiserror::Error;

/// The main error type for indicator computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A window, multiplier, or period combination is outside its valid
    /// range for the requested operation.
    ///
    /// Raised for zero windows, windows longer than the input series,
    /// non-positive band multipliers, a fast MACD window that is not
    /// strictly smaller than the slow window, and empty retracement
    /// ranges.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the parameter violation.
        reason: String,
    },

    /// The input series is empty, so no value can ever be produced.
    ///
    /// A series that is non-empty but merely too short for the requested
    /// window is not an error: the indicator returns a series with zero
    /// defined points instead. This policy is applied uniformly across
    /// all rolling indicators.
    #[error("insufficient data for {indicator}: required {required} bars, got {actual}")]
    InsufficientData {
        /// The number of bars required for at least one defined value.
        required: usize,
        /// The number of bars provided.
        actual: usize,
        /// The operation that was attempted.
        indicator: &'static str,
    },

    /// A retracement range whose highest high equals its lowest low.
    ///
    /// Retracement levels are fractions of the high-to-low distance; with
    /// zero distance every level collapses onto the same price.
    #[error("degenerate range: high {high} equals low {low}")]
    DegenerateRange {
        /// The highest high found in the range.
        high: f64,
        /// The lowest low found in the range.
        low: f64,
    },

    /// Two series fed to the crossover detector do not share identical
    /// timestamps.
    #[error("misaligned series: {reason}")]
    MisalignedSeries {
        /// Description of the mismatch.
        reason: String,
    },

    /// A bar violates the OHLC ordering invariant or contains a
    /// non-finite or negative price.
    #[error("invalid bar: {reason}")]
    InvalidBar {
        /// Description of the violated invariant.
        reason: String,
    },

    /// Bar timestamps are not strictly increasing.
    #[error("timestamps not strictly increasing at bar {index}")]
    NonMonotonicTimestamps {
        /// Index of the first offending bar.
        index: usize,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience alias for results using the market-metrics [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
