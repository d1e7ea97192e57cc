// Console logging setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Build the filter: `RUST_LOG` wins, otherwise `info` (or `debug` when verbose)
/// for our own crates and `warn` for everything else.
pub fn build_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,gassist_client={level},gassist={level}"))
    })
}

/// Install a stderr fmt layer so stdout stays clean for JSON output
pub fn init(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    // try_init: a global subscriber may already be installed
    let _ = Registry::default()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
