//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ssr_requests_total` (counter): rendered pages by status
//! - `ssr_render_duration_seconds` (histogram): pipeline latency
//! - `ssr_render_failures_total` (counter): renders that took the error path
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and serve scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one rendered page.
pub fn record_page(status: u16, start_time: Instant) {
    let duration = start_time.elapsed().as_secs_f64();

    counter!("ssr_requests_total", "status" => status.to_string()).increment(1);
    histogram!("ssr_render_duration_seconds").record(duration);
}

/// Record a render that ended on the error path.
pub fn record_render_failure() {
    counter!("ssr_render_failures_total").increment(1);
    counter!("ssr_requests_total", "status" => "500").increment(1);
}
