use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;
use crate::config::LoggingSettings;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Build the filter, preferring `RUST_LOG` over the configured level
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|source| TelemetryError::EnvFilter {
            value: settings.level.clone(),
            source,
        }),
    }
}

/// Install the global tracing subscriber
///
/// `format = "pretty"` gives human-readable output; anything else logs JSON.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = env_filter(settings)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format.eq_ignore_ascii_case("pretty") {
        subscriber.pretty().try_init()
    } else {
        subscriber.json().try_init()
    };

    installed.map_err(TelemetryError::Subscriber)
}
