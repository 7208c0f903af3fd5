//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! pipeline / http produce:
//!     → logging.rs (structured tracing events, EnvFilter)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (text or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request via TraceLayer
//! - Metrics are recorded even when no exporter is installed; they are
//!   dropped by the default no-op recorder

pub mod logging;
pub mod metrics;

pub use self::logging::init_logging;
pub use self::metrics::init_metrics;
