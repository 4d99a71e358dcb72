//! Bounded arithmetic shared by every aging rule.

/// Clamp `value` into the closed range `[min, max]`.
///
/// Unlike [`Ord::clamp`], an inverted range does not panic: `min` wins. Rules
/// always pass constant, well-ordered bounds, so this only matters for callers
/// composing their own ranges.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value > max {
        return max.max(min);
    }
    if value < min {
        return min;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn values_inside_range_are_untouched() {
        assert_eq!(clamp(0, 0, 50), 0);
        assert_eq!(clamp(25, 0, 50), 25);
        assert_eq!(clamp(50, 0, 50), 50);
    }

    #[test]
    fn values_outside_range_snap_to_nearest_bound() {
        assert_eq!(clamp(-1, 0, 50), 0);
        assert_eq!(clamp(51, 0, 50), 50);
        assert_eq!(clamp(i32::MIN, 0, 50), 0);
        assert_eq!(clamp(i32::MAX, 0, 50), 50);
    }

    #[test]
    fn inverted_range_prefers_min() {
        assert_eq!(clamp(100, 10, 5), 10);
        assert_eq!(clamp(-100, 10, 5), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        #[test]
        fn result_is_within_bounds(value in any::<i32>(), min in -100i32..100, span in 0i32..100) {
            let max = min + span;
            let clamped = clamp(value, min, max);
            prop_assert!(clamped >= min && clamped <= max);
        }
    }
}
