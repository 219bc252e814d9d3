//! Diagnostic output.
//!
//! Components report failures through `tracing` events. Hosts that want them
//! on stderr call [`init`] once at startup; the filter comes from `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "portfolio_core=info,static_client=warn";

/// Install a formatting subscriber. Safe to call more than once.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a formatting subscriber with a fallback filter used when `RUST_LOG` is unset.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
