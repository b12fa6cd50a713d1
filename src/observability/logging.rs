//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where formatted log output goes.
///
/// One-shot mode must keep stdout clean: it carries nothing but the
/// response document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, with a development-friendly
/// fallback otherwise.
pub fn init_logging(target: LogTarget) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "edgefn=debug,tower_http=debug".into());

    match target {
        LogTarget::Stdout => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
