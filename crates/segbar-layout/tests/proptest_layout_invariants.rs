//! Property-based invariant tests for the segment layout solver.
//!
//! 1. The last right edge equals the total width, under every policy.
//! 2. Fixed-only layouts keep their declared widths.
//! 3. Equal weights split the span evenly; the leftmost takes the rest.
//! 4. Edges are monotone and allocations fit when the fixed sum fits.
//! 5. Largest remainder hands out exactly the leftover span.
//! 6. Rejected appends and content assignments leave state unchanged.
//! 7. Recompute is idempotent.

use proptest::prelude::*;
use segbar_layout::{LayoutOptions, RoundingPolicy, Segment, SegmentLayout, solve};

// ── Helpers ─────────────────────────────────────────────────────────────

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        (0i32..=500).prop_map(|w| Segment::fixed(w).unwrap()),
        (1i32..=10).prop_map(|w| Segment::weighted(w).unwrap()),
    ]
}

fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(segment_strategy(), 0..12)
}

fn policy_strategy() -> impl Strategy<Value = RoundingPolicy> {
    prop_oneof![
        Just(RoundingPolicy::PerSegmentFloor),
        Just(RoundingPolicy::QuotientFirst),
        Just(RoundingPolicy::LargestRemainder),
    ]
}

fn fixed_sum(segments: &[Segment]) -> i32 {
    segments.iter().filter_map(|s| s.fixed_width()).sum()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Last edge is the total width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn last_edge_is_total_width(
        segments in segments_strategy(),
        total in 0i32..=5000,
        policy in policy_strategy(),
    ) {
        let result = solve(&segments, total, policy).unwrap();
        prop_assert_eq!(result.len(), segments.len());
        if let Some(&last) = result.right_edges().last() {
            prop_assert_eq!(last, total);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Fixed-only layouts keep declared widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_only_keeps_declared_widths(
        widths in prop::collection::vec(0i32..=300, 1..10),
        total in 0i32..=5000,
    ) {
        let segments: Vec<_> = widths.iter().map(|&w| Segment::fixed(w).unwrap()).collect();
        let result = solve(&segments, total, RoundingPolicy::default()).unwrap();
        prop_assert_eq!(result.allocated(), widths.as_slice());
        // On screen every segment but the leftmost shows its declared width.
        let on_screen = result.widths();
        prop_assert_eq!(&on_screen[1..], &widths[1..]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Equal weights split evenly
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn equal_weights_split_evenly(n in 1usize..=16, total in 0i32..=5000) {
        let segments = vec![Segment::weighted(1).unwrap(); n];
        let result = solve(&segments, total, RoundingPolicy::default()).unwrap();
        let widths = result.widths();
        let share = total / n as i32;

        prop_assert!(widths[1..].iter().all(|&w| w == share), "widths {:?}", widths);
        prop_assert_eq!(widths[0], total - share * (n as i32 - 1));
        prop_assert_eq!(widths.iter().sum::<i32>(), total);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Monotone edges and fitting allocations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_monotone_when_fixed_fits(
        segments in segments_strategy(),
        slack in 0i32..=2000,
        policy in policy_strategy(),
    ) {
        let total = fixed_sum(&segments) + slack;
        let result = solve(&segments, total, policy).unwrap();
        let edges = result.right_edges();

        prop_assert!(edges.iter().all(|&e| e >= 0), "edges {:?}", edges);
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]), "edges {:?}", edges);
        prop_assert!(result.allocated().iter().sum::<i32>() <= total);
    }

    #[test]
    fn weighted_starve_when_fixed_overflows(
        segments in segments_strategy(),
        deficit in 1i32..=500,
    ) {
        let fixed = fixed_sum(&segments);
        prop_assume!(fixed >= deficit);
        let result = solve(&segments, fixed - deficit, RoundingPolicy::default()).unwrap();
        for (segment, &width) in segments.iter().zip(result.allocated()) {
            if segment.weight().is_some() {
                prop_assert_eq!(width, 0);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Largest remainder is exact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn largest_remainder_hands_out_all_leftover(
        segments in segments_strategy(),
        total in 0i32..=5000,
    ) {
        prop_assume!(segments.iter().any(|s| s.weight().is_some()));
        let result = solve(&segments, total, RoundingPolicy::LargestRemainder).unwrap();
        let weighted: i32 = segments
            .iter()
            .zip(result.allocated())
            .filter(|(s, _)| s.weight().is_some())
            .map(|(_, &w)| w)
            .sum();
        prop_assert_eq!(weighted, (total - fixed_sum(&segments)).max(0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Rejected operations leave state unchanged
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rejected_appends_keep_state(
        segments in segments_strategy(),
        bad_width in i32::MIN..0,
        bad_weight in i32::MIN..=0,
        total in 0i32..=5000,
    ) {
        let mut layout: SegmentLayout =
            SegmentLayout::with_options(LayoutOptions::new().initial_width(total));
        for segment in &segments {
            match (segment.fixed_width(), segment.weight()) {
                (Some(w), _) => { layout.append_fixed(w).unwrap(); }
                (None, Some(w)) => { layout.append_weighted(w).unwrap(); }
                (None, None) => unreachable!(),
            }
        }
        let before = layout.layout().clone();

        prop_assert!(layout.append_fixed(bad_width).unwrap_err().is_invalid_argument());
        prop_assert!(layout.append_weighted(bad_weight).unwrap_err().is_invalid_argument());
        prop_assert_eq!(layout.len(), segments.len());
        prop_assert_eq!(layout.layout(), &before);
    }

    #[test]
    fn too_many_values_assign_nothing(count in 0usize..8, extra in 1usize..4) {
        let mut layout: SegmentLayout<usize> = SegmentLayout::new();
        layout.extend_weighted(&vec![1; count]).unwrap();

        let err = layout.set_all_contents(0..count + extra).unwrap_err();
        prop_assert!(err.is_invalid_argument());
        prop_assert!(layout.contents().all(|c| c.is_none()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Recompute is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recompute_is_idempotent(segments in segments_strategy(), total in 0i32..=5000) {
        let mut layout: SegmentLayout = SegmentLayout::new();
        for segment in &segments {
            if let Some(w) = segment.fixed_width() {
                layout.append_fixed(w).unwrap();
            } else if let Some(w) = segment.weight() {
                layout.append_weighted(w).unwrap();
            }
        }
        let first = layout.recompute(total).unwrap().clone();
        let second = layout.recompute(total).unwrap().clone();
        prop_assert_eq!(first, second);
    }
}
