//! Capacity growth policy.
//!
//! The policy is intentionally tiny: a zero-capacity array jumps straight to
//! its seed capacity, and a non-empty one adds half its current capacity
//! (rounded up) as many times as it takes to fit the requirement. The ~1.5x
//! ratio keeps peak memory overhead below doubling while the growth stays
//! geometric, so a run of N pushes reallocates only O(log N) times.
//!
//! Bulk appends reuse the same step function instead of jumping straight to
//! the requirement, so N single pushes and one bulk append of N elements land
//! on identical capacities.

/// Seed capacity for the first growth of a zero-capacity array.
///
/// This is the default for the `INIT_CAP` parameter of
/// [`DynArr`](crate::DynArr); pick a different seed per array type where the
/// default is a poor fit.
pub const DEFAULT_INIT_CAP: usize = 64;

/// Computes the capacity after growing `current` until it holds `required`
/// slots, seeding empty arrays with `init`.
///
/// Returns `None` if the step arithmetic overflows `usize`; callers treat
/// that as a fatal capacity overflow. `init` must be nonzero or the step
/// from an empty array would never make progress.
pub(crate) fn grown_capacity(current: usize, required: usize, init: usize) -> Option<usize> {
    debug_assert!(init > 0);
    let mut cap = if current == 0 { init } else { current };
    while cap < required {
        // (cap + 1) / 2, written so the +1 cannot overflow at usize::MAX.
        let step = cap / 2 + (cap & 1);
        cap = cap.checked_add(step)?;
    }
    Some(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_jumps_to_seed() {
        assert_eq!(grown_capacity(0, 1, 64), Some(64));
        assert_eq!(grown_capacity(0, 1, 8), Some(8));
    }

    #[test]
    fn empty_array_steps_past_seed_for_large_requirement() {
        // 8 -> 12 -> 18 -> 27
        assert_eq!(grown_capacity(0, 20, 8), Some(27));
    }

    #[test]
    fn step_sequence_from_default_seed() {
        // 64 -> 96 -> 144 -> 216 -> 324
        assert_eq!(grown_capacity(64, 65, 64), Some(96));
        assert_eq!(grown_capacity(96, 97, 64), Some(144));
        assert_eq!(grown_capacity(144, 145, 64), Some(216));
        assert_eq!(grown_capacity(216, 217, 64), Some(324));
    }

    #[test]
    fn rounds_half_up_for_odd_capacity() {
        // (3 + 1) / 2 == 2
        assert_eq!(grown_capacity(3, 4, 64), Some(5));
        // cap 1 still makes progress: step is 1.
        assert_eq!(grown_capacity(1, 2, 64), Some(2));
    }

    #[test]
    fn sufficient_capacity_is_unchanged() {
        assert_eq!(grown_capacity(64, 64, 64), Some(64));
        assert_eq!(grown_capacity(100, 10, 64), Some(100));
    }

    #[test]
    fn bulk_growth_matches_iterated_single_steps() {
        // Growing once for a large requirement must land exactly where a
        // sequence of single-slot growths would.
        let mut stepped = 0usize;
        for required in 1..=1000 {
            if stepped < required {
                stepped = grown_capacity(stepped, required, 16).unwrap();
            }
        }
        assert_eq!(grown_capacity(0, 1000, 16), Some(stepped));
    }

    #[test]
    fn overflow_reports_none() {
        assert_eq!(grown_capacity(usize::MAX - 1, usize::MAX, 64), None);
    }

    #[test]
    fn growth_is_geometric() {
        // Reaching 1 million slots from the default seed takes few steps.
        let mut cap = 0usize;
        let mut steps = 0;
        while cap < 1_000_000 {
            cap = grown_capacity(cap, cap + 1, DEFAULT_INIT_CAP).unwrap();
            steps += 1;
        }
        assert!(steps < 32, "took {steps} reallocation steps");
    }
}
