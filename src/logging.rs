//! Tracing setup for the command-line front end

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a stderr fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. "warn" or
/// "expense_ledger=debug") applies. Later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (tests, embedding apps)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
