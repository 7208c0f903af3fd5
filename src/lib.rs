//! Server-side rendering service library.

// Pipeline core
pub mod document;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod styles;

// Inputs and application
pub mod app;
pub mod assets;
pub mod config;

// Serving and cross-cutting concerns
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::SsrConfig;
pub use http::HttpServer;
pub use lifecycle::{bootstrap, Shutdown};
pub use pipeline::{RenderedPage, SsrError, SsrPipeline};
