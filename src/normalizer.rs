//! Rescales a column by its maximum absolute value.

use itertools::{Itertools, MinMaxResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub values: Vec<f64>,

    /// `max(max(x), -min(x))`, zero only for an all-zero column.
    pub coefficient: f64,
}

impl Normalized {
    /// Coefficient to divide or multiply by: a zero coefficient is treated as `1`.
    #[must_use]
    pub fn divisor(&self) -> f64 {
        if self.coefficient == 0.0 {
            1.0
        } else {
            self.coefficient
        }
    }

    /// Whether the column holds at least two distinct values.
    #[must_use]
    pub fn has_spread(&self) -> bool {
        matches!(self.values.iter().minmax(), MinMaxResult::MinMax(min, max) if min < max)
    }
}

#[must_use]
pub fn normalize(values: &[f64]) -> Normalized {
    let coefficient = match values.iter().copied().minmax() {
        MinMaxResult::NoElements => 0.0,
        MinMaxResult::OneElement(value) => value.max(-value),
        MinMaxResult::MinMax(min, max) => max.max(-min),
    };
    let values = if coefficient == 0.0 {
        vec![0.0; values.len()]
    } else {
        values.iter().map(|value| value / coefficient).collect()
    };
    Normalized {
        values,
        coefficient,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalize_ok() {
        let normalized = normalize(&[-4.0, 2.0, 1.0]);
        assert_eq!(normalized.coefficient, 4.0);
        assert_eq!(normalized.values, [-1.0, 0.5, 0.25]);
        assert_eq!(normalized.divisor(), 4.0);
    }

    #[test]
    fn all_zero_ok() {
        let normalized = normalize(&[0.0, 0.0, 0.0]);
        assert_eq!(normalized.coefficient, 0.0);
        assert_eq!(normalized.values, [0.0, 0.0, 0.0]);
        assert_eq!(normalized.divisor(), 1.0);
        assert!(!normalized.has_spread());
    }

    #[test]
    fn single_value_ok() {
        let normalized = normalize(&[-3.0]);
        assert_eq!(normalized.coefficient, 3.0);
        assert_eq!(normalized.values, [-1.0]);
        assert!(!normalized.has_spread());
    }

    #[test]
    fn has_spread_ok() {
        assert!(normalize(&[1.0, 2.0]).has_spread());
        assert!(!normalize(&[5.0, 5.0, 5.0]).has_spread());
    }

    proptest! {
        #[test]
        fn round_trip(values in prop::collection::vec(-1e6..1e6_f64, 1..50)) {
            let normalized = normalize(&values);
            prop_assert_eq!(normalized.values.len(), values.len());
            for (value, scaled) in values.iter().zip(&normalized.values) {
                prop_assert!(scaled.abs() <= 1.0);
                prop_assert!((scaled * normalized.divisor() - value).abs() <= 1e-9 * value.abs().max(1.0));
            }
        }

        #[test]
        fn all_zero_round_trip(n in 1..50_usize) {
            let normalized = normalize(&vec![0.0; n]);
            prop_assert_eq!(normalized.coefficient, 0.0);
            prop_assert!(normalized.values.iter().all(|value| *value == 0.0));
            prop_assert!(normalized.values.iter().all(|value| (value / normalized.divisor()).is_finite()));
        }
    }
}
