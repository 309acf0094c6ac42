#![forbid(unsafe_code)]

//! Layout configuration.

/// How the leftover span is split among weighted segments.
///
/// Fixed segments keep their declared width under every policy, and the
/// last right edge always equals the total width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingPolicy {
    /// `floor(remaining * weight / weight_sum)` per segment.
    ///
    /// Units lost to truncation end up in the leftmost segment, because
    /// edges are accumulated from the right.
    #[default]
    PerSegmentFloor,
    /// `floor(remaining / weight_sum) * weight` per segment.
    ///
    /// Truncates once before scaling, so the leftmost segment can absorb up
    /// to `weight_sum - 1` units per unit of weight. Matches status bars
    /// that computed the unit share first.
    QuotientFirst,
    /// Largest remainder apportionment.
    ///
    /// Every weighted segment gets its floor share, then the leftover units
    /// go one each to the segments with the largest fractional remainder
    /// (lower index wins ties). Weighted widths sum to exactly the leftover
    /// span.
    LargestRemainder,
}

impl RoundingPolicy {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerSegmentFloor => "per-segment-floor",
            Self::QuotientFirst => "quotient-first",
            Self::LargestRemainder => "largest-remainder",
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Options for a [`SegmentLayout`](crate::SegmentLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    /// Total width used by appends before the host reports a size.
    ///
    /// Negative values are treated as 0.
    pub initial_width: i32,
    /// Split policy for weighted segments.
    pub rounding: RoundingPolicy,
}

impl LayoutOptions {
    /// Default options: zero initial width, per-segment floor rounding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width used before the first host resize.
    #[must_use]
    pub fn initial_width(mut self, width: i32) -> Self {
        self.initial_width = width;
        self
    }

    /// Set the rounding policy.
    #[must_use]
    pub fn rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }
}
