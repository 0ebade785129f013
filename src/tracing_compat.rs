//! Internal logging macros that compile to nothing without the `tracing`
//! feature.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

// Distinct names: a local `warn` macro would clash with the `#[warn]` lint attribute.
#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! debug_noop {
        ($($arg:tt)*) => {};
    }

    macro_rules! warn_noop {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug_noop as debug;
    pub(crate) use warn_noop as warn;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, warn};
