#![forbid(unsafe_code)]

//! Pure right-edge solver.
//!
//! # Algorithm
//!
//! 1. Sum fixed widths and weights.
//! 2. `remaining = max(total_width - fixed_sum, 0)` is the span shared by
//!    weighted segments according to the [`RoundingPolicy`].
//! 3. Walk segments right to left with a cursor starting at `total_width`:
//!    the cursor is the segment's right edge, then the segment's width is
//!    subtracted from it.
//!
//! The cursor is never clamped. When `total_width` is smaller than the fixed
//! sum, earlier segments get negative edges; clamping them on screen is the
//! host's job. Arithmetic runs in `i64` so `remaining * weight` can't
//! overflow for any `i32` inputs.

use crate::error::{InvalidArgument, LayoutError, OverflowStage, Result};
use crate::options::RoundingPolicy;
use crate::segment::{Segment, SegmentKind};

/// Solved positions for an ordered list of segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutResult {
    total_width: i32,
    right_edges: Vec<i32>,
    allocated: Vec<i32>,
}

impl LayoutResult {
    /// Total width the layout was solved for.
    #[inline]
    #[must_use]
    pub fn total_width(&self) -> i32 {
        self.total_width
    }

    /// Right edge of each segment, measured from the layout origin.
    #[inline]
    #[must_use]
    pub fn right_edges(&self) -> &[i32] {
        &self.right_edges
    }

    /// Width the solver assigned to each segment.
    ///
    /// Fixed segments report their declared width, weighted ones their
    /// share of the leftover span.
    #[inline]
    #[must_use]
    pub fn allocated(&self) -> &[i32] {
        &self.allocated
    }

    /// On-screen width of each segment, derived from consecutive edges.
    ///
    /// The leftmost segment spans from the origin to its right edge, so it
    /// includes any units the allocation left over (or lacks any overflow).
    #[must_use]
    pub fn widths(&self) -> Vec<i32> {
        let mut left = 0i64;
        self.right_edges
            .iter()
            .map(|&edge| {
                let width = i64::from(edge) - left;
                left = i64::from(edge);
                width.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.right_edges.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right_edges.is_empty()
    }
}

/// Compute right edges for `segments` within `total_width`.
///
/// # Errors
///
/// - `InvalidArgument` if `total_width` is negative.
/// - `ArithmeticOverflow` if an edge doesn't fit in `i32`.
pub fn solve(
    segments: &[Segment],
    total_width: i32,
    rounding: RoundingPolicy,
) -> Result<LayoutResult> {
    if total_width < 0 {
        return Err(InvalidArgument::NegativeTotalWidth { total_width }.into());
    }

    let overflow = |stage| LayoutError::ArithmeticOverflow { stage };

    let mut fixed_sum = 0i64;
    let mut weight_sum = 0i64;
    for segment in segments {
        match segment.kind() {
            SegmentKind::Fixed => {
                let width = i64::from(segment.fixed_width().unwrap_or(0));
                fixed_sum = fixed_sum
                    .checked_add(width)
                    .ok_or(overflow(OverflowStage::Aggregate))?;
            }
            SegmentKind::Weighted => {
                let weight = i64::from(segment.weight().unwrap_or(0));
                weight_sum = weight_sum
                    .checked_add(weight)
                    .ok_or(overflow(OverflowStage::Aggregate))?;
            }
        }
    }

    let total = i64::from(total_width);
    let remaining = (total - fixed_sum).max(0);

    segbar_core::debug!(
        segments = segments.len(),
        total_width,
        fixed_sum,
        weight_sum,
        rounding = rounding.label(),
        "solving segment layout"
    );
    if fixed_sum > total {
        segbar_core::warn!(
            total_width,
            fixed_sum,
            "fixed segments overflow the available width"
        );
    }

    let allocated = distribute(segments, remaining, weight_sum, rounding)?;

    let mut right_edges = vec![0i32; segments.len()];
    let mut cursor = total;
    for (i, &width) in allocated.iter().enumerate().rev() {
        right_edges[i] = i32::try_from(cursor).map_err(|_| overflow(OverflowStage::Edge))?;
        cursor -= i64::from(width);
    }

    Ok(LayoutResult {
        total_width,
        right_edges,
        allocated,
    })
}

/// Per-segment widths: fixed widths as declared, weighted shares of
/// `remaining` according to `rounding`.
fn distribute(
    segments: &[Segment],
    remaining: i64,
    weight_sum: i64,
    rounding: RoundingPolicy,
) -> Result<Vec<i32>> {
    let overflow = || LayoutError::ArithmeticOverflow {
        stage: OverflowStage::Distribute,
    };

    let mut widths = vec![0i64; segments.len()];
    let mut remainders: Vec<(usize, i64)> = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        match (segment.fixed_width(), segment.weight()) {
            (Some(width), _) => widths[i] = i64::from(width),
            (None, Some(weight)) if weight_sum > 0 => {
                let weight = i64::from(weight);
                widths[i] = match rounding {
                    RoundingPolicy::PerSegmentFloor => {
                        remaining.checked_mul(weight).ok_or_else(overflow)? / weight_sum
                    }
                    RoundingPolicy::QuotientFirst => (remaining / weight_sum)
                        .checked_mul(weight)
                        .ok_or_else(overflow)?,
                    RoundingPolicy::LargestRemainder => {
                        let numerator = remaining.checked_mul(weight).ok_or_else(overflow)?;
                        remainders.push((i, numerator % weight_sum));
                        numerator / weight_sum
                    }
                };
            }
            // No weighted segments means nothing to share.
            _ => widths[i] = 0,
        }
    }

    if rounding == RoundingPolicy::LargestRemainder && !remainders.is_empty() {
        let floor_sum: i64 = remainders.iter().map(|&(i, _)| widths[i]).sum();
        let deficit = usize::try_from(remaining - floor_sum).map_err(|_| overflow())?;
        // Largest remainder first, lower index on ties.
        remainders.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for &(i, _) in remainders.iter().take(deficit) {
            widths[i] += 1;
        }
    }

    widths
        .into_iter()
        .map(|w| i32::try_from(w).map_err(|_| overflow()))
        .collect()
}
