//! Numeric abstraction and shared input validation.
//!
//! Indicator kernels are generic over [`SeriesElement`], which abstracts
//! the floating-point element type (`f32` or `f64`) of a price slice.
//! Validation helpers implement the uniform edge-case policy: invalid
//! parameters are rejected first, an empty input raises
//! [`Error::InsufficientData`], and a window that cannot fit the input is
//! rejected as [`Error::InvalidParameter`].

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A floating-point type usable as the element of a price slice.
///
/// Extends `num_traits::Float` with fallible conversions and the small
/// constants indicator formulas need. Implemented for `f32` and `f64`
/// through a blanket impl.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Converts a `usize` (typically a window length) into this type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConversion`] if the value is not
    /// representable.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Converts an `f64` constant into this type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConversion`] if the value is not
    /// representable.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// The constant 2, used in the EMA smoothing factor `2 / (window + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // 2 is representable in every Float type
        <Self as NumCast>::from(2).unwrap()
    }

    /// The constant 100, used for percentage scaling in RSI.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100).unwrap()
    }

    /// The constant 50, the neutral RSI midpoint.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        <Self as NumCast>::from(50).unwrap()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Rejects a zero window.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `window` is zero.
#[inline]
pub fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(Error::InvalidParameter {
            reason: "window must be at least 1".into(),
        });
    }
    Ok(())
}

/// Applies the shared input policy for rolling-window indicators.
///
/// Checks in order: the window is at least 1, the input is non-empty
/// (`required` reports the minimum length for one defined value), and the
/// window fits within the input.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] or [`Error::InsufficientData`] as
/// described above.
#[inline]
pub fn validate_windowed_input<T: SeriesElement>(
    data: &[T],
    window: usize,
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_window(window)?;
    if data.is_empty() {
        return Err(Error::InsufficientData {
            required,
            actual: 0,
            indicator,
        });
    }
    if window > data.len() {
        return Err(Error::InvalidParameter {
            reason: format!(
                "window {window} exceeds series length {len}",
                len = data.len()
            ),
        });
    }
    Ok(())
}
