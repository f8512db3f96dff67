use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber: `RUST_LOG` wins over the configured directives,
/// and exactly one of the plain or JSON formatters is active.
///
/// A second call leaves the first subscriber in place.
pub fn init_tracing(config: &TracingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directives));

    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
    });
    let plain_layer = (!config.json_format).then(|| fmt::layer().with_target(true));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(
            environment = %config.environment,
            json_format = config.json_format,
            directives = %config.default_directives,
            "Tracing initialized"
        ),
        Err(e) => tracing::debug!(error = %e, "Tracing subscriber already installed"),
    }
}
