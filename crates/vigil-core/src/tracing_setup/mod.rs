//! Tracing setup: subscriber initialization, span macros, structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Environment variable holding per-target log directives.
pub const LOG_ENV_VAR: &str = "VIGIL_LOG";

static INIT: Once = Once::new();

/// Initialize the Vigil tracing/logging system with default settings.
///
/// Reads `VIGIL_LOG` for per-target levels, e.g.
/// `VIGIL_LOG=vigil_pipeline=debug,vigil_privacy=warn`.
/// Falls back to `vigil=info` when unset or invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `VIGIL_LOG` still wins over `config.log_level` when present.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.fallback_directive()));
        install(filter, config.json_logs);
    });
}

/// Initialize tracing with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        install(EnvFilter::new(filter), false);
    });
}

fn install(filter: EnvFilter, json: bool) {
    // A host process may already own the global subscriber; keep theirs.
    if json {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    }
}
