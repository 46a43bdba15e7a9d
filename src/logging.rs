//! Logging setup
//!
//! Progress lines ("Processing", "Deleting", "Skipping ...") are tracing
//! events written to stderr, so stdout stays reserved for reports and JSON.
//!
//! `RUST_LOG` wins over the verbosity flag when set:
//!
//! ```bash
//! RUST_LOG=structuresmith=debug structuresmith render
//! RUST_LOG=structuresmith::infrastructure::sources=trace structuresmith diff app
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn default_directive(verbose: u8, json: bool) -> &'static str {
    match (verbose, json) {
        (0, true) => "warn",
        (0, false) => "info",
        (1, _) => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, json)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 0)
        .with_writer(std::io::stderr)
        .try_init();
}
