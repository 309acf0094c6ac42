#![forbid(unsafe_code)]

//! Segment layout for status bars.
//!
//! A status bar is a row of segments. Each segment either has a fixed width
//! or a weight; weighted segments share whatever the fixed ones leave over,
//! proportionally to their weights. The output is the right edge of every
//! segment, which is what native status bar controls consume.
//!
//! - [`Segment`] - Fixed or weighted layout unit
//! - [`solve`](fn@solve) - Pure function from segments and total width to edges
//! - [`SegmentLayout`] - Segment list, per-segment content, cached result
//! - [`SegmentBar`] - Layout wired to an [`EdgeSink`] and host events
//! - [`RoundingPolicy`] - How truncated units are handled
//!
//! # Example
//!
//! ```
//! use segbar_layout::{RoundingPolicy, Segment, solve};
//!
//! let segments = [
//!     Segment::fixed(100)?,
//!     Segment::weighted(1)?,
//!     Segment::weighted(1)?,
//!     Segment::weighted(2)?,
//! ];
//! let result = solve(&segments, 400, RoundingPolicy::default())?;
//! assert_eq!(result.right_edges(), &[100, 175, 250, 400]);
//! # Ok::<(), segbar_layout::LayoutError>(())
//! ```

pub mod bar;
pub mod engine;
pub mod error;
pub mod options;
pub mod segment;
pub mod solve;

pub use bar::{EdgeSink, SegmentBar};
pub use engine::SegmentLayout;
pub use error::{InvalidArgument, LayoutError, OverflowStage, Result};
pub use options::{LayoutOptions, RoundingPolicy};
pub use segbar_core::HostEvent;
pub use segment::{Segment, SegmentHandle, SegmentKind};
pub use solve::{LayoutResult, solve};
