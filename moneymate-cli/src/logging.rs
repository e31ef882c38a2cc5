use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing on stderr so stdout stays clean for tables and JSON.
///
/// Default level: WARN (DEBUG for our crates with `verbose`); `RUST_LOG` overrides.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,moneymate=debug,moneymate_core=debug,moneymate_ingest=debug,moneymate_advice=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    tracing::debug!("tracing initialized");
}
