//! Logging setup for dispatcher binaries.
//!
//! Output goes to stderr: stdout belongs to the subcommand being launched.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter directives, e.g. `ARGPOINTS_LOG=argpoints=debug`.
pub const LOG_ENV: &str = "ARGPOINTS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    if let Err(e) = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
    {
        tracing::debug!("logging already initialised: {e}");
    }
}
