#![forbid(unsafe_code)]

//! Core: host notifications and the logging facade shared by segbar crates.

pub mod event;
pub mod logging;

pub use event::{HostEvent, SizeRequest};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
