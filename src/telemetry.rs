//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber
///
/// Filtering follows `RUST_LOG` and defaults to `default_directive`. With
/// `json` set, events are written as one JSON object per line.
pub fn init_tracing(json: bool, default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = fmt().with_env_filter(filter).with_target(true);

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = if json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };
}
