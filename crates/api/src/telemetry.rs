//! Tracing subscriber setup for the server binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
const DEFAULT_FILTER: &str = "newsroom_api=debug,newsroom_core=debug,newsroom_db=debug,tower_http=debug";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Log filter and format.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directives (`info`, `newsroom_api=debug`, ...).
    pub filter: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// | Env Var      | Default                         |
    /// |--------------|---------------------------------|
    /// | `LOG_LEVEL`  | per-crate `debug`               |
    /// | `LOG_FORMAT` | `pretty` (`json` for JSON lines)|
    ///
    /// `RUST_LOG`, when set, takes precedence over `LOG_LEVEL` at init time.
    pub fn from_env() -> Self {
        let filter = std::env::var("LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match std::env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self { filter, format }
    }
}

/// Install the global tracing subscriber. Call once, from `main`.
pub fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
