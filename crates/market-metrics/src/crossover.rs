//! Golden cross and death cross detection.
//!
//! Scans two timestamp-aligned indicator series (conventionally a short
//! and a long moving average) and reports the bars where their ordering
//! flips. The walk only considers slots where both series are defined,
//! so differing warm-up lengths are handled naturally.
//!
//! Zero-crossing policy: exact equality of the two series is "no clear
//! side". The last nonzero sign is remembered across a run of ties, and
//! an event fires only at the next slot whose nonzero sign differs from
//! the remembered one. No event can fire before a first nonzero sign has
//! been observed, and resolving a tie back to the remembered sign does
//! not retrigger the previous event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::sma::simple_moving_average;
use crate::output::IndicatorSeries;
use crate::series::PriceSeries;
use crate::traits::SeriesElement;

/// The direction of an ordering flip between short and long series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverKind {
    /// Short crossed above long.
    GoldenCross,
    /// Short crossed below long.
    DeathCross,
}

/// One detected ordering flip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent<T = f64> {
    /// Bar at which the flip became visible.
    pub timestamp: DateTime<Utc>,
    /// Direction of the flip.
    pub kind: CrossoverKind,
    /// Short series value at the event bar.
    pub short_value: T,
    /// Long series value at the event bar.
    pub long_value: T,
}

/// Detects all crossovers between two aligned indicator series.
///
/// Events come back in chronological order and never overlap: each flip
/// of the sign of `short - long` produces exactly one event.
///
/// # Errors
///
/// Returns [`Error::MisalignedSeries`] if the two inputs differ in length
/// or timestamps.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use market_metrics::{detect_crossovers, CrossoverKind, IndicatorSeries};
///
/// let timestamps: Vec<_> = (0..4)
///     .map(|i| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(i))
///     .collect();
/// let short = IndicatorSeries::from_parts(
///     timestamps.clone(),
///     vec![None, Some(1.0), Some(3.0), Some(3.0)],
/// )
/// .unwrap();
/// let long = IndicatorSeries::from_parts(
///     timestamps,
///     vec![None, Some(2.0), Some(2.0), Some(2.0)],
/// )
/// .unwrap();
///
/// let events = detect_crossovers(&short, &long).unwrap();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, CrossoverKind::GoldenCross);
/// ```
pub fn detect_crossovers<T: SeriesElement>(
    short: &IndicatorSeries<T>,
    long: &IndicatorSeries<T>,
) -> Result<Vec<CrossoverEvent<T>>> {
    if short.len() != long.len() {
        return Err(Error::MisalignedSeries {
            reason: format!(
                "short series has {} slots, long series has {}",
                short.len(),
                long.len()
            ),
        });
    }
    if short.timestamps() != long.timestamps() {
        return Err(Error::MisalignedSeries {
            reason: "short and long series timestamps differ".into(),
        });
    }

    let mut events = Vec::new();
    let mut prev_sign: Option<i8> = None;

    for i in 0..short.len() {
        let (Some(short_value), Some(long_value)) = (short.value_at(i), long.value_at(i)) else {
            continue;
        };
        let diff = short_value - long_value;
        let sign: i8 = if diff > T::zero() {
            1
        } else if diff < T::zero() {
            -1
        } else {
            // Exact tie: postpone determination, keep the remembered sign.
            continue;
        };

        if let Some(prev) = prev_sign {
            if prev != sign {
                events.push(CrossoverEvent {
                    timestamp: short.timestamps()[i],
                    kind: if sign > 0 {
                        CrossoverKind::GoldenCross
                    } else {
                        CrossoverKind::DeathCross
                    },
                    short_value,
                    long_value,
                });
            }
        }
        prev_sign = Some(sign);
    }

    Ok(events)
}

/// Crossovers between a short and a long simple moving average of the
/// series closes, the conventional golden/death cross setup.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `short_window` is not strictly
/// smaller than `long_window`, plus the validation of
/// [`simple_moving_average`].
pub fn sma_crossovers(
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<Vec<CrossoverEvent>> {
    if short_window >= long_window {
        return Err(Error::InvalidParameter {
            reason: format!(
                "short window {short_window} must be smaller than long window {long_window}"
            ),
        });
    }
    let short = simple_moving_average(series, short_window)?;
    let long = simple_moving_average(series, long_window)?;
    detect_crossovers(&short, &long)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamps(n: usize) -> Vec<DateTime<Utc>> {
        (0..n)
            .map(|i| {
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64)
            })
            .collect()
    }

    fn series(values: Vec<Option<f64>>) -> IndicatorSeries {
        IndicatorSeries::from_parts(timestamps(values.len()), values).unwrap()
    }

    fn kinds(events: &[CrossoverEvent]) -> Vec<CrossoverKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn rising_short_fires_single_golden_cross() {
        let short = series(vec![Some(1.0), Some(2.0), Some(4.0), Some(5.0)]);
        let long = series(vec![Some(3.0), Some(3.0), Some(3.0), Some(3.0)]);
        let events = detect_crossovers(&short, &long).unwrap();
        assert_eq!(kinds(&events), vec![CrossoverKind::GoldenCross]);
        assert_eq!(events[0].timestamp, timestamps(4)[2]);
        assert_eq!(events[0].short_value, 4.0);
        assert_eq!(events[0].long_value, 3.0);
    }

    #[test]
    fn identical_series_never_fire() {
        let values = vec![Some(1.0), Some(2.0), Some(3.0)];
        let short = series(values.clone());
        let long = series(values);
        assert!(detect_crossovers(&short, &long).unwrap().is_empty());
    }

    #[test]
    fn no_event_at_first_defined_point() {
        // Short is already above long when both become defined.
        let short = series(vec![None, Some(5.0), Some(6.0)]);
        let long = series(vec![None, Some(3.0), Some(3.0)]);
        assert!(detect_crossovers(&short, &long).unwrap().is_empty());
    }

    #[test]
    fn alternating_ordering_fires_alternating_events() {
        let short = series(vec![Some(1.0), Some(5.0), Some(1.0), Some(5.0)]);
        let long = series(vec![Some(3.0); 4]);
        let events = detect_crossovers(&short, &long).unwrap();
        assert_eq!(
            kinds(&events),
            vec![
                CrossoverKind::GoldenCross,
                CrossoverKind::DeathCross,
                CrossoverKind::GoldenCross,
            ]
        );
    }

    #[test]
    fn tie_postpones_cross_to_next_nonzero_sign() {
        // Below, exactly equal, then above: the cross is reported at the
        // first strictly-above bar.
        let short = series(vec![Some(1.0), Some(3.0), Some(5.0)]);
        let long = series(vec![Some(3.0), Some(3.0), Some(3.0)]);
        let events = detect_crossovers(&short, &long).unwrap();
        assert_eq!(kinds(&events), vec![CrossoverKind::GoldenCross]);
        assert_eq!(events[0].timestamp, timestamps(3)[2]);
    }

    #[test]
    fn tie_resolving_to_same_side_does_not_retrigger() {
        // Above, touch, above again: no new golden cross.
        let short = series(vec![Some(4.0), Some(5.0), Some(3.0), Some(5.0)]);
        let long = series(vec![Some(3.0), Some(3.0), Some(3.0), Some(3.0)]);
        assert!(detect_crossovers(&short, &long).unwrap().is_empty());
    }

    #[test]
    fn leading_ties_suppress_any_event() {
        // Equal until the end; the single nonzero sign has no
        // predecessor to flip from.
        let short = series(vec![Some(3.0), Some(3.0), Some(4.0)]);
        let long = series(vec![Some(3.0), Some(3.0), Some(3.0)]);
        assert!(detect_crossovers(&short, &long).unwrap().is_empty());
    }

    #[test]
    fn undefined_slots_are_skipped_not_compared() {
        // A gap in the middle of the long series hides the momentary dip.
        let short = series(vec![Some(5.0), Some(1.0), Some(5.0)]);
        let long = series(vec![Some(3.0), None, Some(3.0)]);
        assert!(detect_crossovers(&short, &long).unwrap().is_empty());
    }

    #[test]
    fn misaligned_lengths_rejected() {
        let short = series(vec![Some(1.0), Some(2.0)]);
        let long = series(vec![Some(1.0)]);
        assert!(matches!(
            detect_crossovers(&short, &long),
            Err(Error::MisalignedSeries { .. })
        ));
    }

    #[test]
    fn misaligned_timestamps_rejected() {
        let short = series(vec![Some(1.0), Some(2.0)]);
        let shifted: Vec<DateTime<Utc>> = timestamps(2)
            .into_iter()
            .map(|ts| ts + chrono::Duration::hours(1))
            .collect();
        let long = IndicatorSeries::from_parts(shifted, vec![Some(1.0), Some(2.0)]).unwrap();
        assert!(matches!(
            detect_crossovers(&short, &long),
            Err(Error::MisalignedSeries { .. })
        ));
    }

    #[test]
    fn inverted_sma_windows_rejected() {
        use crate::series::Bar;
        let bars: Vec<Bar> = (0..10)
            .map(|i| {
                let ts = timestamps(10)[i];
                Bar::new(ts, 10.0, 10.0, 10.0, 10.0, 1).unwrap()
            })
            .collect();
        let series = PriceSeries::new(bars).unwrap();
        assert!(matches!(
            sma_crossovers(&series, 5, 5),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
