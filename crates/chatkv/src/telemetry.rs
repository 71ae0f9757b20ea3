//! Tracing subscriber setup for binaries that embed chatkv.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host process's call. This helper is the one-liner for hosts that have
//! no opinion.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Only this test installs a global subscriber in the unit-test binary.
        assert!(init_tracing().is_ok());
        assert!(init_tracing().is_err());
    }
}
