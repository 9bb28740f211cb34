//! Shared helpers for the roadmap-checker integration tests.

pub mod builders;
pub mod fixtures;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use roadmap_checker::logging::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Upper bound for any async test step.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Install a capturing subscriber once per test binary.
///
/// Output is only shown for failing tests. The filter comes from
/// `ROADMAP_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `fut`, panicking if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_TIMEOUT, fut).await {
        Ok(out) => out,
        Err(_) => panic!("test step exceeded {:?}", TEST_TIMEOUT),
    }
}
