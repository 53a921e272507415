//! Tracing setup for the `ptl` binary.

/// Environment variable holding an `EnvFilter` directive, e.g. `PTL_LOG=project_timeline=debug`.
pub const LOG_ENV: &str = "PTL_LOG";

/// Install a stderr `fmt` subscriber. `PTL_LOG` wins over the verbosity flags.
pub fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
