use thiserror::Error;

use super::entities::Event;

/// Score of a rarity-1 station under the baseline event.
pub const BASE_VALUE: f64 = 10_000.0;

/// Days in the reference year that event durations are measured against.
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("event {id:?} has invalid rarity {rarity} or duration {duration}")]
    InvalidEvent {
        id: String,
        rarity: f64,
        duration: f64,
    },
    #[error("station rarity {rarity} is negative or not finite")]
    InvalidRarity { rarity: f64 },
    #[error("value {value} does not fit in a score")]
    OutOfRange { value: f64 },
}

/// Event multiplier: `sqrt((1 / rarity) * (365 / duration))`.
///
/// Exactly 1 for the baseline event (rarity 1, 365 days).
pub fn event_multiplier(event: &Event) -> Result<f64, ValuationError> {
    // Written as negated comparisons so NaN is rejected as well.
    if !(event.rarity > 0.0) || !(event.duration > 0.0) {
        return Err(ValuationError::InvalidEvent {
            id: event.id.clone(),
            rarity: event.rarity,
            duration: event.duration,
        });
    }

    Ok(((1.0 / event.rarity) * (DAYS_PER_YEAR / event.duration)).sqrt())
}

/// Integer score of one copy of a station with `rarity` held under `event`.
///
/// Zero-rarity stations are worth nothing, whatever the event. Otherwise the score is
/// `BASE_VALUE / rarity` scaled by [`event_multiplier`] and rounded half
/// away from zero. Rarities so small that the score leaves the `i64` range
/// are rejected rather than clamped.
pub fn compute_value(rarity: f64, event: &Event) -> Result<i64, ValuationError> {
    if !rarity.is_finite() || rarity < 0.0 {
        return Err(ValuationError::InvalidRarity { rarity });
    }
    if rarity == 0.0 {
        return Ok(0);
    }

    let multiplier = event_multiplier(event)?;
    let value = ((BASE_VALUE / rarity) * multiplier).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !value.is_finite() || value >= i64::MAX as f64 {
        return Err(ValuationError::OutOfRange { value });
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::tests::{baseline, event};

    #[test]
    fn zero_rarity_is_worthless() {
        assert_eq!(compute_value(0.0, &baseline()), Ok(0));
        assert_eq!(compute_value(0.0, &event("E1", "Anniversary", 2.0, 30.0)), Ok(0));
    }

    #[test]
    fn baseline_divides_base_value() {
        let base = baseline();
        assert_eq!(event_multiplier(&base), Ok(1.0));
        for rarity in [1.0_f64, 3.0, 5.0, 7.0, 16.0, 333.0, 0.5] {
            let expected = (10_000.0 / rarity).round() as i64;
            assert_eq!(compute_value(rarity, &base), Ok(expected), "rarity {rarity}");
        }
        assert_eq!(compute_value(5.0, &base), Ok(2000));
        assert_eq!(compute_value(3.0, &base), Ok(3333));
    }

    #[test]
    fn rounds_half_up() {
        // 10000 / 32 = 312.5
        assert_eq!(compute_value(32.0, &baseline()), Ok(313));
        // 10000 / 1600 = 6.25
        assert_eq!(compute_value(1600.0, &baseline()), Ok(6));
    }

    #[test]
    fn event_boosts_value() {
        let anniversary = event("E1", "Anniversary", 2.0, 30.0);
        // 2000 * sqrt(0.5 * 365 / 30) = 4932.88
        assert_eq!(compute_value(5.0, &anniversary), Ok(4933));
    }

    #[test]
    fn value_decreases_with_rarity() {
        let anniversary = event("E1", "Anniversary", 2.0, 30.0);
        let mut previous = i64::MAX;
        for rarity in [1.0_f64, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0] {
            let value = compute_value(rarity, &anniversary).unwrap();
            assert!(value < previous, "rarity {rarity} gave {value}");
            previous = value;
        }
    }

    #[test]
    fn value_decreases_with_event_rarity_and_duration() {
        let short = compute_value(5.0, &event("a", "a", 2.0, 30.0)).unwrap();
        let longer = compute_value(5.0, &event("b", "b", 2.0, 60.0)).unwrap();
        let rarer = compute_value(5.0, &event("c", "c", 4.0, 30.0)).unwrap();
        assert!(longer < short);
        assert!(rarer < short);
    }

    #[test]
    fn rejects_degenerate_events() {
        for (rarity, duration) in [(0.0, 30.0), (-1.0, 30.0), (2.0, 0.0), (2.0, -5.0), (f64::NAN, 30.0)] {
            let bad = event("bad", "Broken", rarity, duration);
            assert!(
                matches!(compute_value(5.0, &bad), Err(ValuationError::InvalidEvent { .. })),
                "rarity {rarity} duration {duration}"
            );
        }
        // Zero rarity short-circuits before the event is looked at.
        assert_eq!(compute_value(0.0, &event("bad", "Broken", 0.0, 30.0)), Ok(0));
    }

    #[test]
    fn rejects_negative_and_non_finite_rarity() {
        for rarity in [-4.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    compute_value(rarity, &baseline()),
                    Err(ValuationError::InvalidRarity { .. })
                ),
                "rarity {rarity}"
            );
        }
    }

    #[test]
    fn tiny_rarity_is_out_of_range() {
        assert!(matches!(
            compute_value(1e-15, &baseline()),
            Err(ValuationError::OutOfRange { .. })
        ));
        assert!(matches!(
            compute_value(f64::MIN_POSITIVE, &baseline()),
            Err(ValuationError::OutOfRange { .. })
        ));
        // 10000 / 1.6e-15 = 6.25e18 still fits.
        assert!(compute_value(1.6e-15, &baseline()).unwrap() > 6_000_000_000_000_000_000);
    }
}
