//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use ssr_server::assets::AssetManifest;
use ssr_server::config::{Environment, SsrConfig};
use ssr_server::http::HttpServer;
use ssr_server::lifecycle::{bootstrap_with, Shutdown};
use ssr_server::pipeline::SsrPipeline;
use ssr_server::styles::StyleModules;
use tokio::net::TcpListener;

pub const FOOTER_CSS: &str = include_str!("../../styles/footer.css");

/// Default config rendering in `environment`, serving static files from
/// `public_dir`.
pub fn test_config(environment: Environment, public_dir: &Path) -> SsrConfig {
    let mut config = SsrConfig::default();
    config.app.title = "Test Blog".into();
    config.app.description = "Integration test pages".into();
    config.styles.environment = environment;
    config.assets.public_dir = public_dir.to_string_lossy().into_owned();
    config
}

pub fn test_manifest() -> AssetManifest {
    AssetManifest::new(
        Some("/assets/client.css".into()),
        "/assets/vendor.js",
        "/assets/client.js",
    )
}

/// The real application over in-memory resources.
pub fn test_pipeline(config: &SsrConfig) -> SsrPipeline {
    let modules = StyleModules::from_sources(
        [("footer.css", FOOTER_CSS)],
        config.styles.environment,
    );
    bootstrap_with(config, test_manifest(), modules).unwrap()
}

/// Serve `pipeline` on an ephemeral port.
pub async fn start_server(config: SsrConfig, pipeline: SsrPipeline) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, pipeline);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Every class name used in `class="..."` attributes of `html`.
pub fn class_names(html: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("class=\"") {
        rest = &rest[start + 7..];
        let end = rest.find('"').unwrap();
        names.extend(rest[..end].split_whitespace().map(str::to_string));
        rest = &rest[end..];
    }
    names
}

/// The inline style text of an assembled document.
pub fn inline_styles(html: &str) -> &str {
    let open = "<style id=\"jss-server-side\">";
    let start = html.find(open).unwrap() + open.len();
    let end = start + html[start..].find("</style>").unwrap();
    &html[start..end]
}
