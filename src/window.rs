//! Longest window holding at most `k` zeros.
//!
//! [`max_window`] sweeps the raw bits with two pointers. [`max_window_over_segments`]
//! reaches the same answer from the segment decomposition, treating the zeros on both
//! sides of a segment group identically (including before the first segment).

use itertools::Itertools;
use log::{debug, trace};

use crate::bits::{BinarySequence, Budget};
use crate::error::RunError;
use crate::segments::Segment;

// =============================================================================
// Entry point
// =============================================================================

/// Validates the inputs, then returns the longest run reachable by flipping at most `k` zeros.
///
/// The budget is checked before the sequence and nothing is scanned until both pass.
///
/// ```
/// use consecutive_ones::longest_achievable_run;
///
/// assert_eq!(longest_achievable_run(&[1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0], 2), Ok(6));
/// assert!(longest_achievable_run(&[1, 0], -1).is_err());
/// ```
pub fn longest_achievable_run(sequence: &[i64], k: i64) -> Result<usize, RunError> {
    let budget = Budget::new(k)?;
    let sequence = BinarySequence::try_from(sequence)?;
    let best = max_window(&sequence, budget);
    debug!("n={} k={k} -> {best}", sequence.len());
    Ok(best)
}

// =============================================================================
// Sweep over bits
// =============================================================================

/// Two-pointer sweep: `[start, end)` never holds more than `k` zeros.
pub fn max_window(sequence: &BinarySequence, budget: Budget) -> usize {
    let bits = sequence.as_slice();
    let k = budget.get();
    let mut start = 0;
    let mut zeros = 0;
    let mut best = 0;

    for (end, bit) in bits.iter().enumerate() {
        if bit.is_zero() {
            zeros += 1;
        }
        while zeros > k {
            if bits[start].is_zero() {
                zeros -= 1;
            }
            start += 1;
        }
        best = best.max(end + 1 - start);
    }
    best
}

// =============================================================================
// Sweep over segments
// =============================================================================

/// Same answer as [`max_window`], computed from `segments` of a sequence of length `len`.
///
/// For each first segment the group is stretched right while the gaps fit the budget;
/// whatever budget remains spills into the zeros bordering the group.
///
/// `segments` must be ordered, separated by at least one zero and end within `len`,
/// as produced by [`extract_segments`](crate::segments::extract_segments).
pub fn max_window_over_segments(segments: &[Segment], len: usize, budget: Budget) -> usize {
    debug_assert!(
        segments.iter().tuple_windows().all(|(a, b)| a.end < b.start)
            && segments.iter().all(|s| s.start < s.end && s.end <= len),
        "segments must be ordered, separated and within the sequence"
    );
    let k = budget.get();
    if segments.is_empty() {
        return k.min(len);
    }

    let mut best = 0;
    let mut last = 0;
    let mut spent = 0;

    for first in 0..segments.len() {
        if last < first {
            last = first;
            spent = 0;
        }
        while let Some(next) = segments.get(last + 1) {
            let gap = segments[last].gap_to(next);
            if spent + gap > k {
                break;
            }
            spent += gap;
            last += 1;
        }

        let left_edge = match first {
            0 => 0,
            _ => segments[first - 1].end,
        };
        let right_edge = segments.get(last + 1).map_or(len, |next| next.start);
        let slack = (segments[first].start - left_edge) + (right_edge - segments[last].end);
        let covered = segments[last].end - segments[first].start;
        let candidate = covered + (k - spent).min(slack);
        trace!("segments {first}..={last}: covered={covered} spent={spent} -> {candidate}");
        best = best.max(candidate);

        if last > first {
            spent -= segments[first].gap_to(&segments[first + 1]);
        }
    }
    best
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;
    use crate::segments::{extract_segments, longest_segment};
    use proptest::prelude::*;

    fn both(values: &[i64], k: usize) -> (usize, usize) {
        let sequence = BinarySequence::from_values(values).unwrap();
        let segments = extract_segments(&sequence);
        (
            max_window(&sequence, Budget::from(k)),
            max_window_over_segments(&segments, sequence.len(), Budget::from(k)),
        )
    }

    fn brute_force(sequence: &BinarySequence, k: usize) -> usize {
        let bits = sequence.as_slice();
        let mut best = 0;
        for start in 0..bits.len() {
            for end in start + 1..=bits.len() {
                let zeros = bits[start..end].iter().filter(|b| b.is_zero()).count();
                if zeros <= k {
                    best = best.max(end - start);
                }
            }
        }
        best
    }

    #[test]
    fn test_two_three_mixed_runs() {
        assert_eq!(both(&[1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0], 2), (6, 6));
    }

    #[test]
    fn test_longer_sequence_budget_three() {
        let values = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1];
        assert_eq!(both(&values, 3), (10, 10));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(both(&[], 5), (0, 0));
        assert_eq!(longest_achievable_run(&[], 5), Ok(0));
    }

    #[test]
    fn test_all_zeros_without_budget() {
        assert_eq!(both(&[0, 0, 0], 0), (0, 0));
    }

    #[test]
    fn test_all_zeros_with_budget() {
        assert_eq!(both(&[0, 0, 0], 2), (2, 2));
        assert_eq!(both(&[0, 0, 0], 9), (3, 3));
    }

    #[test]
    fn test_all_ones_without_budget() {
        assert_eq!(both(&[1, 1, 1], 0), (3, 3));
    }

    #[test]
    fn test_alternating_single_flip() {
        assert_eq!(both(&[1, 0, 1, 0, 1], 1), (3, 3));
    }

    #[test]
    fn test_leading_zeros_count_as_slack() {
        // Only the zeros ahead of the first segment can absorb the budget.
        assert_eq!(both(&[0, 0, 1, 1], 2), (4, 4));
        assert_eq!(both(&[0, 0, 0, 1, 0, 0, 0, 0, 1], 2), (3, 3));
    }

    #[test]
    fn test_budget_larger_than_zero_count() {
        assert_eq!(both(&[1, 0, 0, 1, 0], 10), (5, 5));
        assert_eq!(longest_achievable_run(&[1, 0, 0, 1, 0], i64::MAX), Ok(5));
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert_eq!(
            longest_achievable_run(&[1, 0, 1], -1),
            Err(RunError::InvalidArgument(InvalidArgument::NegativeBudget { k: -1 }))
        );
    }

    #[test]
    fn test_non_binary_element_rejected() {
        assert_eq!(
            longest_achievable_run(&[1, 0, 3, 1], 1),
            Err(RunError::non_binary(2, 3))
        );
    }

    #[test]
    fn test_budget_checked_before_sequence() {
        assert_eq!(
            longest_achievable_run(&[7], -2),
            Err(RunError::negative_budget(-2))
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "segments must be ordered")]
    fn test_unordered_segments_rejected() {
        let segments = [Segment { start: 5, end: 7 }, Segment { start: 1, end: 2 }];
        max_window_over_segments(&segments, 8, Budget::from(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "segments must be ordered")]
    fn test_segment_past_len_rejected() {
        max_window_over_segments(&[Segment { start: 2, end: 9 }], 8, Budget::from(0));
    }

    fn sequence_strategy() -> impl Strategy<Value = BinarySequence> {
        prop::collection::vec(any::<bool>(), 0..64).prop_map(|bits| bits.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_bounded_by_length(sequence in sequence_strategy(), k in 0usize..80) {
            let best = max_window(&sequence, Budget::from(k));
            prop_assert!(best <= sequence.len());
        }

        #[test]
        fn prop_monotone_in_budget(sequence in sequence_strategy(), k in 0usize..80) {
            let lower = max_window(&sequence, Budget::from(k));
            let upper = max_window(&sequence, Budget::from(k + 1));
            prop_assert!(lower <= upper);
        }

        #[test]
        fn prop_saturates_at_zero_count(sequence in sequence_strategy(), extra in 0usize..8) {
            let k = sequence.count_zeros() + extra;
            prop_assert_eq!(max_window(&sequence, Budget::from(k)), sequence.len());
        }

        #[test]
        fn prop_zero_budget_is_longest_run(sequence in sequence_strategy()) {
            let segments = extract_segments(&sequence);
            prop_assert_eq!(max_window(&sequence, Budget::from(0)), longest_segment(&segments));
        }

        #[test]
        fn prop_reversal_symmetric(sequence in sequence_strategy(), k in 0usize..80) {
            prop_assert_eq!(
                max_window(&sequence, Budget::from(k)),
                max_window(&sequence.reversed(), Budget::from(k))
            );
        }

        #[test]
        fn prop_sweeps_match_brute_force(sequence in sequence_strategy(), k in 0usize..80) {
            let expected = brute_force(&sequence, k);
            let segments = extract_segments(&sequence);
            prop_assert_eq!(max_window(&sequence, Budget::from(k)), expected);
            prop_assert_eq!(
                max_window_over_segments(&segments, sequence.len(), Budget::from(k)),
                expected
            );
        }
    }
}
