//! Tracing subscriber setup for the `school` binary.
//!
//! Logging is off unless `SCHOOL_LOG` is set, e.g. `SCHOOL_LOG=debug`.
//! Logs go to stderr so stdout carries only lesson output.

use std::sync::Once;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "SCHOOL_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once, if `SCHOOL_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if let Ok(directives) = std::env::var(LOG_ENV_VAR) {
            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
