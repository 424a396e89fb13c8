//! Diagnostic logging setup.
//!
//! Logs go to stderr so grid output on stdout stays clean. The filter is read
//! from `GOL_LOG` (same syntax as `RUST_LOG`), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GOL_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_err| EnvFilter::new("warn"));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
