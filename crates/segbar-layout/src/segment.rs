#![forbid(unsafe_code)]

//! Segment descriptors and handles.

use crate::error::{InvalidArgument, Result};

/// Whether a segment keeps its width or shares leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Exact width regardless of the total span.
    Fixed,
    /// Share of the leftover span proportional to its weight.
    Weighted,
}

/// One unit of horizontal space.
///
/// Values are validated on construction: a fixed width is never negative and
/// a weight is never below 1. The kind can't change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    kind: SegmentKind,
    value: i32,
}

impl Segment {
    /// A fixed-width segment.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `width` is negative.
    pub const fn fixed(width: i32) -> Result<Self> {
        if width < 0 {
            return Err(crate::LayoutError::InvalidArgument(
                InvalidArgument::NegativeWidth { width },
            ));
        }
        Ok(Self {
            kind: SegmentKind::Fixed,
            value: width,
        })
    }

    /// A weighted segment.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `weight` is zero or negative.
    pub const fn weighted(weight: i32) -> Result<Self> {
        if weight <= 0 {
            return Err(crate::LayoutError::InvalidArgument(
                InvalidArgument::NonPositiveWeight { weight },
            ));
        }
        Ok(Self {
            kind: SegmentKind::Weighted,
            value: weight,
        })
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> SegmentKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self.kind, SegmentKind::Fixed)
    }

    /// Declared width, for fixed segments.
    #[must_use]
    pub const fn fixed_width(self) -> Option<i32> {
        match self.kind {
            SegmentKind::Fixed => Some(self.value),
            SegmentKind::Weighted => None,
        }
    }

    /// Relative share, for weighted segments.
    #[must_use]
    pub const fn weight(self) -> Option<i32> {
        match self.kind {
            SegmentKind::Weighted => Some(self.value),
            SegmentKind::Fixed => None,
        }
    }
}

/// Index-based identifier of a segment.
///
/// This is dumb: no validation is made, the index is simply kept. If the
/// index is invalid (or becomes invalid), operations using the handle fail
/// with [`InvalidArgument::UnknownSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentHandle(usize);

impl SegmentHandle {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the segment, counted from the left.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}
