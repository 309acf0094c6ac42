#![forbid(unsafe_code)]

//! Stateful segment layout.
//!
//! [`SegmentLayout`] owns the ordered segment list, per-segment content and
//! the last solved [`LayoutResult`]. Every structural mutation re-solves the
//! layout at the last known total width; host notifications re-solve at the
//! width they carry.
//!
//! # Example
//!
//! ```
//! use segbar_layout::SegmentLayout;
//!
//! let mut layout: SegmentLayout<&str> = SegmentLayout::new();
//! layout.append_fixed(100)?;
//! layout.extend_weighted(&[1, 1, 2])?;
//!
//! let result = layout.recompute(400)?;
//! assert_eq!(result.right_edges(), &[100, 175, 250, 400]);
//!
//! layout.set_all_contents(["Ready", "Ln 1"])?;
//! assert_eq!(layout.content(layout.handle(1)), Some(&"Ln 1"));
//! # Ok::<(), segbar_layout::LayoutError>(())
//! ```

use segbar_core::HostEvent;

use crate::error::{InvalidArgument, Result};
use crate::options::LayoutOptions;
use crate::segment::{Segment, SegmentHandle};
use crate::solve::{LayoutResult, solve};

/// Ordered fixed and weighted segments with their solved right edges.
///
/// `V` is whatever the caller shows in each segment (text, icon, color).
/// Not thread-safe by itself: a single owner mutates it, usually the UI
/// thread of the host.
#[derive(Debug, Clone)]
pub struct SegmentLayout<V = ()> {
    segments: Vec<Segment>,
    contents: Vec<Option<V>>,
    options: LayoutOptions,
    total_width: i32,
    layout: LayoutResult,
    suspended: bool,
}

impl<V> Default for SegmentLayout<V> {
    fn default() -> Self {
        Self::with_options(LayoutOptions::default())
    }
}

impl<V> SegmentLayout<V> {
    /// Empty layout with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty layout with the given options.
    #[must_use]
    pub fn with_options(options: LayoutOptions) -> Self {
        let total_width = options.initial_width.max(0);
        Self {
            segments: Vec::new(),
            contents: Vec::new(),
            options,
            total_width,
            layout: LayoutResult::default(),
            suspended: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, left to right.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Handle for the segment at `index`.
    ///
    /// No validation is made; see [`SegmentHandle`].
    #[inline]
    #[must_use]
    pub fn handle(&self, index: usize) -> SegmentHandle {
        SegmentHandle::new(index)
    }

    /// Segment behind `handle`, if the handle is still valid.
    #[must_use]
    pub fn segment(&self, handle: SegmentHandle) -> Option<Segment> {
        self.segments.get(handle.index()).copied()
    }

    /// Last solved layout.
    ///
    /// Stale while the host is minimized: segments appended since then have
    /// no edges until the next resize.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Last known total width.
    #[inline]
    #[must_use]
    pub fn total_width(&self) -> i32 {
        self.total_width
    }

    /// True while the host is minimized.
    #[inline]
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Append a fixed-width segment.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `width` is negative. The layout is unchanged on
    /// error.
    pub fn append_fixed(&mut self, width: i32) -> Result<SegmentHandle> {
        let segment = Segment::fixed(width)?;
        self.push_segments(&[segment]).map(SegmentHandle::new)
    }

    /// Append a weighted segment.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `weight` is below 1. The layout is unchanged on
    /// error.
    pub fn append_weighted(&mut self, weight: i32) -> Result<SegmentHandle> {
        let segment = Segment::weighted(weight)?;
        self.push_segments(&[segment]).map(SegmentHandle::new)
    }

    /// Append several fixed-width segments with a single re-solve.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any width is negative; nothing is appended then.
    pub fn extend_fixed(&mut self, widths: &[i32]) -> Result<Vec<SegmentHandle>> {
        let segments = widths
            .iter()
            .map(|&width| Segment::fixed(width))
            .collect::<Result<Vec<_>>>()?;
        self.push_batch(&segments)
    }

    /// Append several weighted segments with a single re-solve.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any weight is below 1; nothing is appended then.
    pub fn extend_weighted(&mut self, weights: &[i32]) -> Result<Vec<SegmentHandle>> {
        let segments = weights
            .iter()
            .map(|&weight| Segment::weighted(weight))
            .collect::<Result<Vec<_>>>()?;
        self.push_batch(&segments)
    }

    /// Solve the layout for `total_width` and remember the width.
    ///
    /// Always solves, even while suspended; suspension only affects
    /// mutations and host notifications.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `total_width` is negative, `ArithmeticOverflow`
    /// if an edge doesn't fit. The previous layout and width are kept on
    /// error.
    pub fn recompute(&mut self, total_width: i32) -> Result<&LayoutResult> {
        self.layout = solve(&self.segments, total_width, self.options.rounding)?;
        self.total_width = total_width;
        Ok(&self.layout)
    }

    /// React to a host notification.
    ///
    /// Returns the new layout, or `None` when the host was minimized and
    /// nothing was solved.
    ///
    /// # Errors
    ///
    /// Same as [`recompute`](Self::recompute). On error the layout stays
    /// suspended if it was.
    pub fn handle_event(&mut self, event: HostEvent) -> Result<Option<&LayoutResult>> {
        match event {
            HostEvent::Minimized => {
                segbar_core::debug!(
                    segments = self.segments.len(),
                    "host minimized, layout suspended"
                );
                self.suspended = true;
                Ok(None)
            }
            HostEvent::Resized { width } | HostEvent::Restored { width } => {
                self.layout = solve(&self.segments, width, self.options.rounding)?;
                self.total_width = width;
                if self.suspended {
                    segbar_core::info!(
                        segments = self.segments.len(),
                        width,
                        "host visible, layout resumed"
                    );
                }
                self.suspended = false;
                Ok(Some(&self.layout))
            }
        }
    }

    /// Assign `values[i]` to segment `i`; later segments are untouched.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` (too many values) if there are more values than
    /// segments. No value is assigned then. At most one value past the
    /// segment count is consumed, so `values` may be unbounded.
    pub fn set_all_contents<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().take(self.segments.len() + 1).collect();
        if values.len() > self.segments.len() {
            return Err(InvalidArgument::TooManyValues {
                values: values.len(),
                segments: self.segments.len(),
            }
            .into());
        }
        for (slot, value) in self.contents.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Ok(())
    }

    /// Assign one segment's content, returning the previous value.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the handle doesn't name a segment.
    pub fn set_content(&mut self, handle: SegmentHandle, value: V) -> Result<Option<V>> {
        let segments = self.segments.len();
        let slot = self
            .contents
            .get_mut(handle.index())
            .ok_or(InvalidArgument::UnknownSegment {
                index: handle.index(),
                segments,
            })?;
        Ok(slot.replace(value))
    }

    /// Content of one segment, if set.
    #[must_use]
    pub fn content(&self, handle: SegmentHandle) -> Option<&V> {
        self.contents.get(handle.index()).and_then(Option::as_ref)
    }

    /// Content of every segment, left to right.
    pub fn contents(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        self.contents.iter().map(Option::as_ref)
    }

    fn push_batch(&mut self, segments: &[Segment]) -> Result<Vec<SegmentHandle>> {
        let start = self.push_segments(segments)?;
        Ok((start..start + segments.len()).map(SegmentHandle::new).collect())
    }

    /// Append and re-solve at the last known width. Returns the index of the
    /// first appended segment. Rolls back if solving fails; while suspended
    /// the solved layout is discarded.
    fn push_segments(&mut self, segments: &[Segment]) -> Result<usize> {
        let start = self.segments.len();
        self.segments.extend_from_slice(segments);

        // Solve even while suspended so an append that can't be laid out is
        // rejected now rather than on the next resize.
        match solve(&self.segments, self.total_width, self.options.rounding) {
            Ok(layout) if !self.suspended => self.layout = layout,
            Ok(_) => {}
            Err(err) => {
                self.segments.truncate(start);
                return Err(err);
            }
        }

        self.contents.resize_with(self.segments.len(), || None);
        segbar_core::trace!(
            appended = segments.len(),
            count = self.segments.len(),
            suspended = self.suspended,
            "segments appended"
        );
        Ok(start)
    }
}
