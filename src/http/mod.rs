//! HTTP front end.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router + middleware)
//!     → request.rs (x-request-id assigned and propagated)
//!     → {public_path}/* → ServeDir (static bundles)
//!     → anything else  → SsrPipeline::render_page(original URL)
//!     → response.rs (RenderedPage / SsrError → HTTP response)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{HttpServer, ServerState};
