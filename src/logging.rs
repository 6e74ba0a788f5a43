//! Logging setup.
#![cfg(feature = "logging")]

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` isn’t set.
const DEFAULT_FILTER: &str = "warn";

/// Setup logging of events reported by zonefmt.
///
/// Events are written to stderr so they never mix with formatted zone data
/// written to stdout.
///
/// Use the RUST_LOG environment variable to override the default of only
/// showing warnings.
///
/// E.g. To see every directive processed:
///   RUST_LOG=DEBUG
///
/// Or to see every record parsed:
///   RUST_LOG=zonefmt::zonefile::format=TRACE
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
