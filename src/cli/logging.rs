//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Default log filter for a verbosity level
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "rx_scribe=debug",
        _ => "debug",
    }
}

/// Install the global subscriber, writing to stderr so stdout carries only
/// the transcription. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
