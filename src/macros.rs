//! Crate-internal logging helpers.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise, so call sites need no `cfg` attributes.

/// Emits a `debug`-level event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

/// Emits a `trace`-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
