//! Diagnostic tracing for the `chimera` binary.
//!
//! Campaign progress (start, per-task approvals, escalations, rejections,
//! finish) is reported by `TracingEventSink` through `tracing`, so it lands
//! here. Everything goes to stderr: stdout carries only command results, which
//! keeps `chimera run --json` and `chimera plan` pipeable into `jq`.
//!
//! `RUST_LOG` overrides the default filter:
//!
//! ```bash
//! RUST_LOG=chimera_core=debug chimera run --title "Agentic Future" --goal "..."
//! RUST_LOG=warn chimera run --title "..." --goal "..." --json | jq '.records'
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Approvals and escalations are logged at `info`.
const DEFAULT_FILTER: &str = "info";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
