use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `JOURNAL_LOG=journalapp=debug`.
pub const LOG_ENV: &str = "JOURNAL_LOG";

/// Installs the stderr subscriber. `-v` raises the default level to `debug`;
/// an explicit `JOURNAL_LOG` always wins.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install (tests) is harmless, so the error is dropped.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
