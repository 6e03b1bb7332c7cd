use crate::config::{LogFormat, TelemetryConfig};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directives}' in {origin}")]
    Filter {
        origin: &'static str,
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Picks the filter directives: `RUST_LOG` when set, otherwise `APP_LOG_LEVEL`.
///
/// A malformed `RUST_LOG` is an error rather than being silently replaced.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let (origin, directives) = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => ("RUST_LOG", value),
        _ => ("APP_LOG_LEVEL", config.log_level.clone()),
    };

    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
        origin,
        directives,
        source,
    })
}

/// Logs go to stderr so report and JSON output on stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let installed = match config.log_format {
        LogFormat::Compact => builder.with_target(false).compact().try_init(),
        LogFormat::Full => builder.with_target(true).try_init(),
    };
    installed.map_err(TelemetryError::AlreadyInstalled)
}
