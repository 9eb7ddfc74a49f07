//! Structured logging setup.
//!
//! `RUST_LOG` takes precedence over the defaults chosen here.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directives for the given verbosity.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "receipt_processor=debug,tower_http=debug,info"
    } else {
        "receipt_processor=info,tower_http=info,warn"
    }
}

/// Installs the global `tracing` subscriber. Call once at startup.
pub fn init_logging(debug: bool, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).compact())
            .init();
    }
}
