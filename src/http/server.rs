//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router: static assets plus the SSR fallback
//! - Wire up middleware (request ID, tracing, timeout, panic guard)
//! - Hand each page request's original URL to the pipeline
//! - Serve until the shutdown signal fires
//!
//! # Design Decisions
//! - Rendering is synchronous and CPU-bound, so it runs on the blocking
//!   pool; the request timeout then bounds render time as well

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SsrConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::observability::metrics;
use crate::pipeline::SsrPipeline;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct ServerState {
    pub pipeline: SsrPipeline,
}

/// HTTP front end for the rendering pipeline.
pub struct HttpServer {
    router: Router,
    config: Arc<SsrConfig>,
}

impl HttpServer {
    pub fn new(config: SsrConfig, pipeline: SsrPipeline) -> Self {
        let router = Self::build_router(&config, ServerState { pipeline });
        Self {
            router,
            config: Arc::new(config),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SsrConfig, state: ServerState) -> Router {
        let static_files = ServeDir::new(&config.assets.public_dir);

        Router::new()
            .nest_service(&config.assets.public_path, static_files)
            .fallback(ssr_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request.headers().request_id(),
                        )
                    }))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(CatchPanicLayer::new()),
            )
    }

    /// Run the server until `shutdown` fires or Ctrl+C is pressed.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            public_path = %self.config.assets.public_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {}
                    _ = shutdown_signal() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render every non-asset GET/HEAD request.
async fn ssr_handler(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let start_time = Instant::now();
    let request_id = headers.request_id();
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
        .to_string();

    let pipeline = state.pipeline.clone();
    let render_url = url.clone();
    let rendered = tokio::task::spawn_blocking(move || pipeline.render_page(&render_url)).await;

    let result = match rendered {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(request_id = %request_id, url = %url, error = %e, "Render task failed");
            metrics::record_render_failure();
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    match result {
        Ok(page) => {
            tracing::info!(
                request_id = %request_id,
                url = %url,
                status = page.status.as_u16(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Page served"
            );
            page.into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
