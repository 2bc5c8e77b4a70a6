//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Output is JSON
/// unless `LOG_FORMAT=pretty` is set (local development). Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "pretty");
    if pretty {
        let _ = builder.pretty().try_init();
    } else {
        let _ = builder.json().try_init();
    }
}
