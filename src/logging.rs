//! Tracing subscriber initialization.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to
//! print them to stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, RulerError};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a global fmt subscriber writing to stderr.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<()> {
    init_with_default(DEFAULT_FILTER)
}

/// Like [`init`], with a custom fallback filter such as `"sliding_ruler=debug"`.
pub fn init_with_default(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| RulerError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Whichever test in the binary installs the subscriber first wins.
        let _ = init();
        let err = init_with_default("debug").unwrap_err();
        assert!(matches!(err, RulerError::Logging(_)));
    }
}
