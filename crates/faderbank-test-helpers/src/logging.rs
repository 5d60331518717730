//! `tracing` setup for tests.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TEST_FILTER: &str = "faderbank_engine=debug";

/// Install a test-writer subscriber once per process.
///
/// Output goes through the libtest capture, so it only shows for failing
/// tests or with `--nocapture`. Later calls are no-ops.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok(); // Ignore error if already initialized

    tracing::trace!("test tracing initialized");
}
