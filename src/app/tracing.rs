use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    /// JSON unless `RUST_LOG_FORMAT` is set to something other than `json`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("json") => Self::Json,
            Some(_) => Self::Text,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// A subscriber installed earlier (e.g. by a test harness) is left in place.
pub fn init_tracing() {
    let format = LogFormat::from_env_value(std::env::var("RUST_LOG_FORMAT").ok().as_deref());
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("tracing subscriber already installed: {e}");
    }
}
