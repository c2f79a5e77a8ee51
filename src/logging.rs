//! Diagnostic tracing for the solver.
//!
//! Solver rounds, dictionary loading and opener fallbacks are reported
//! through `tracing`. Output goes to stderr so stdout stays reserved for the
//! command results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=wordle_greedy=debug wordle_greedy solve crane
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
