#![forbid(unsafe_code)]

//! Error types for segment layout.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

/// Which computation overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowStage {
    /// Summing fixed widths or weights.
    Aggregate,
    /// Splitting the remaining span among weighted segments.
    Distribute,
    /// Converting a right edge back to device units.
    Edge,
}

impl fmt::Display for OverflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aggregate => "aggregate",
            Self::Distribute => "distribute",
            Self::Edge => "edge",
        })
    }
}

/// A rejected caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgument {
    NegativeWidth { width: i32 },
    NonPositiveWeight { weight: i32 },
    NegativeTotalWidth { total_width: i32 },
    TooManyValues { values: usize, segments: usize },
    UnknownSegment { index: usize, segments: usize },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWidth { width } => {
                write!(f, "width of segment can't be negative: {width}")
            }
            Self::NonPositiveWeight { weight } => {
                write!(f, "weight must be equal or greater than 1: {weight}")
            }
            Self::NegativeTotalWidth { total_width } => {
                write!(f, "total width can't be negative: {total_width}")
            }
            Self::TooManyValues { values, segments } => write!(
                f,
                "too many values: {values} values for {segments} segments"
            ),
            Self::UnknownSegment { index, segments } => {
                write!(f, "no segment at index {index} (count={segments})")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Error returned by layout operations.
///
/// Every failing operation leaves the layout exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutError {
    InvalidArgument(InvalidArgument),
    ArithmeticOverflow { stage: OverflowStage },
}

impl LayoutError {
    /// The rejected argument, if this is an argument error.
    #[must_use]
    pub const fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            Self::InvalidArgument(arg) => Some(*arg),
            Self::ArithmeticOverflow { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
            Self::ArithmeticOverflow { stage } => {
                write!(f, "arithmetic overflow during {stage} stage")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidArgument(arg) = self {
            return Some(arg);
        }
        None
    }
}

impl From<InvalidArgument> for LayoutError {
    fn from(arg: InvalidArgument) -> Self {
        Self::InvalidArgument(arg)
    }
}
