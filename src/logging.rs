//! Logging setup for the `nid` binary using `tracing` and `tracing-subscriber`.
//!
//! The library only emits events; installing a subscriber is left to the application.
//!
//! # Log Levels
//!
//! - `info`: one event per lookup with the response status
//! - `debug`: rejection reasons (variant and field, never the ID digits)

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: false,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub const fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub const fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    /// Filter directive string for this configuration, ignoring `RUST_LOG`
    pub fn directives(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        format!("{level},national_id={level},nid={level}")
    }

    fn env_filter(&self) -> EnvFilter {
        self.use_env_filter
            .then(EnvFilter::try_from_default_env)
            .and_then(Result::ok)
            .unwrap_or_else(|| EnvFilter::new(self.directives()))
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = config.env_filter();
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_ansi(config.with_ansi)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(config.with_ansi)
                    .without_time(),
            )
            .try_init(),
    }
}
