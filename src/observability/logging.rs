//! Structured logging.
//!
//! `RUST_LOG` wins over the configured level. JSON lines when
//! `observability.json_logs` is set, human-readable otherwise.

use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(level: &str) -> String {
    format!("ssr_server={level},tower_http={level}")
}

/// Install the global subscriber writing to stdout. Calling it again is
/// a no-op.
pub fn init_logging(config: &ObservabilityConfig) {
    init_logging_with_writer(config, std::io::stdout);
}

/// Like [`init_logging`], but keeps stdout free for program output.
pub fn init_stderr_logging(config: &ObservabilityConfig) {
    init_logging_with_writer(config, std::io::stderr);
}

fn init_logging_with_writer<W>(config: &ObservabilityConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
