//! Logging bootstrap for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialise the global [`tracing`] subscriber.
///
/// INFO and above by default, DEBUG with `--verbose`; `RUST_LOG` overrides
/// both. WARN and above go to stderr, everything else to stdout, one line per
/// event. Must be called once at program startup, before any logging; the
/// rest of the crate only emits events.
pub fn init(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .with_writer(make_writer)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();
}
