#![forbid(unsafe_code)]

//! Notifications consumed from the hosting surface.
//!
//! A segment bar lives inside some window or panel that owns the real
//! geometry. The host tells the bar when its available width changes and
//! when it is minimized; the bar never queries the host itself.
//!
//! # Design Notes
//!
//! - Widths are device units, signed so a bogus host value can be rejected
//!   downstream instead of wrapping
//! - A minimized host carries no width: nothing is laid out while hidden

/// Notification from the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// Available width changed.
    Resized {
        /// New available width in device units.
        width: i32,
    },

    /// Host was minimized. Layout is suspended until the next resize.
    Minimized,

    /// Host became visible again after being minimized.
    Restored {
        /// Available width at the time of restoring.
        width: i32,
    },
}

impl HostEvent {
    /// Map a native size notification onto a host event.
    ///
    /// Maximize and restore requests both carry a usable width; the
    /// show/hide requests sent to sibling windows do not change our own
    /// client area and map to `None`.
    #[must_use]
    pub const fn from_size_request(request: SizeRequest, width: i32) -> Option<Self> {
        match request {
            SizeRequest::Restored | SizeRequest::Maximized => Some(Self::Resized { width }),
            SizeRequest::Minimized => Some(Self::Minimized),
            SizeRequest::MaxShow | SizeRequest::MaxHide => None,
        }
    }

    /// The width carried by this event, if any.
    #[must_use]
    pub const fn width(self) -> Option<i32> {
        match self {
            Self::Resized { width } | Self::Restored { width } => Some(width),
            Self::Minimized => None,
        }
    }

    /// True if this event suspends layout.
    #[must_use]
    pub const fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }
}

/// Kind of a native size notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeRequest {
    /// Window was resized normally.
    #[default]
    Restored,
    /// Window was minimized.
    Minimized,
    /// Window was maximized.
    Maximized,
    /// Some other window was restored from maximized.
    MaxShow,
    /// Some other window was maximized.
    MaxHide,
}
