#![forbid(unsafe_code)]

//! Host-facing segment bar.
//!
//! [`SegmentBar`] pairs a [`SegmentLayout`] with an [`EdgeSink`], the thing
//! that actually draws the segments (a native status bar, a terminal row, a
//! test recorder). After every successful re-solve the fresh right edges are
//! handed to the sink verbatim.
//!
//! # Example
//!
//! ```
//! use segbar_core::HostEvent;
//! use segbar_layout::SegmentBar;
//!
//! let mut applied = Vec::new();
//! let sink = |edges: &[i32]| applied.push(edges.to_vec());
//! let mut bar: SegmentBar<&str, _> = SegmentBar::new(sink);
//! bar.append_fixed(100)?;
//! bar.extend_weighted(&[1, 1, 2])?;
//! bar.handle_event(HostEvent::Resized { width: 400 })?;
//! drop(bar);
//!
//! assert_eq!(applied.last(), Some(&vec![100, 175, 250, 400]));
//! # Ok::<(), segbar_layout::LayoutError>(())
//! ```

use segbar_core::HostEvent;

use crate::engine::SegmentLayout;
use crate::error::Result;
use crate::options::LayoutOptions;
use crate::segment::SegmentHandle;

/// Receiver of solved right edges.
pub trait EdgeSink {
    /// Apply right edges, one per segment, left to right.
    fn apply_right_edges(&mut self, right_edges: &[i32]);
}

impl<F> EdgeSink for F
where
    F: FnMut(&[i32]),
{
    fn apply_right_edges(&mut self, right_edges: &[i32]) {
        self(right_edges);
    }
}

/// A segment layout wired to an edge sink.
#[derive(Debug)]
pub struct SegmentBar<V, S> {
    layout: SegmentLayout<V>,
    sink: S,
}

impl<V, S: EdgeSink> SegmentBar<V, S> {
    /// Bar with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(LayoutOptions::default(), sink)
    }

    /// Bar with the given options.
    pub fn with_options(options: LayoutOptions, sink: S) -> Self {
        Self {
            layout: SegmentLayout::with_options(options),
            sink,
        }
    }

    /// Read access to the underlying layout.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &SegmentLayout<V> {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Split into layout and sink.
    pub fn into_parts(self) -> (SegmentLayout<V>, S) {
        (self.layout, self.sink)
    }

    /// See [`SegmentLayout::append_fixed`].
    pub fn append_fixed(&mut self, width: i32) -> Result<SegmentHandle> {
        let handle = self.layout.append_fixed(width)?;
        self.publish_if_visible();
        Ok(handle)
    }

    /// See [`SegmentLayout::append_weighted`].
    pub fn append_weighted(&mut self, weight: i32) -> Result<SegmentHandle> {
        let handle = self.layout.append_weighted(weight)?;
        self.publish_if_visible();
        Ok(handle)
    }

    /// See [`SegmentLayout::extend_fixed`].
    pub fn extend_fixed(&mut self, widths: &[i32]) -> Result<Vec<SegmentHandle>> {
        let handles = self.layout.extend_fixed(widths)?;
        self.publish_if_visible();
        Ok(handles)
    }

    /// See [`SegmentLayout::extend_weighted`].
    pub fn extend_weighted(&mut self, weights: &[i32]) -> Result<Vec<SegmentHandle>> {
        let handles = self.layout.extend_weighted(weights)?;
        self.publish_if_visible();
        Ok(handles)
    }

    /// Solve at `total_width` and push the edges to the sink.
    ///
    /// While the host is minimized the layout is solved and cached but the
    /// sink is not called; the next `Resized`/`Restored` event publishes.
    pub fn recompute(&mut self, total_width: i32) -> Result<()> {
        self.layout.recompute(total_width)?;
        self.publish_if_visible();
        Ok(())
    }

    /// Forward a host notification; the sink is skipped while minimized.
    pub fn handle_event(&mut self, event: HostEvent) -> Result<()> {
        if self.layout.handle_event(event)?.is_some() {
            self.publish();
        }
        Ok(())
    }

    /// See [`SegmentLayout::set_all_contents`].
    pub fn set_all_contents<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.layout.set_all_contents(values)
    }

    /// See [`SegmentLayout::set_content`].
    pub fn set_content(&mut self, handle: SegmentHandle, value: V) -> Result<Option<V>> {
        self.layout.set_content(handle, value)
    }

    fn publish_if_visible(&mut self) {
        if !self.layout.is_suspended() {
            self.publish();
        }
    }

    fn publish(&mut self) {
        self.sink.apply_right_edges(self.layout.layout().right_edges());
    }
}
