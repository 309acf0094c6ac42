#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the macros below are re-exports of the
//! `tracing` crate. Without it they expand to nothing, so layout code can log
//! unconditionally through `segbar_core::debug!` and friends.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Environment variable read by [`init_json`] for the filter directive.
#[cfg(feature = "tracing-json")]
pub const LOG_ENV: &str = "SEGBAR_LOG";

/// Install a global JSON subscriber.
///
/// The filter comes from `SEGBAR_LOG` (e.g. `segbar_layout=debug`) and falls
/// back to `info`. Fails if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()
}
