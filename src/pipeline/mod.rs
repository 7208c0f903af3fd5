//! Per-request server-side rendering pipeline.
//!
//! # Data Flow
//! ```text
//! original URL
//!     → 1. Start: fresh Store, StyleRegistry, ClassNameGenerator
//!     → 2. Rendering: render_to_string → RenderOutput { markup, outcome }
//!     → 3. Deciding: RoutingOutcome → status (302 / 404 / 200)
//!     → 4. Responding: serialize styles + state, assemble document
//!     → RenderedPage { status, location, body }
//! ```
//!
//! # Design Decisions
//! - Nothing mutable outlives one call; only the component tree, manifest
//!   and style resources are shared, and they are read-only
//! - Render failures are returned as `SsrError`; the caller owns the
//!   error response
//! - Routing outcomes are not errors

use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use thiserror::Error;

use crate::assets::AssetManifest;
use crate::config::AppConfig;
use crate::document::{assemble, DocumentParts};
use crate::observability::metrics;
use crate::render::{render_to_string, Component, Location, RenderError, RoutingOutcome};
use crate::store::{create_store, StateOverrides};
use crate::styles::{create_class_name_generator, create_registry, StyleResources};

/// Document metadata taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub favicon: String,
}

impl From<&AppConfig> for PageMeta {
    fn from(app: &AppConfig) -> Self {
        Self {
            title: app.title.clone(),
            description: app.description.clone(),
            favicon: app.favicon.clone(),
        }
    }
}

/// A fully rendered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    /// Redirect target, set only for 302.
    pub location: Option<String>,
    pub body: String,
}

/// Failure on the pipeline's error path.
#[derive(Debug, Error)]
pub enum SsrError {
    #[error("rendering {url} failed: {source}")]
    Render {
        url: String,
        #[source]
        source: RenderError,
    },

    #[error("serializing state for {url} failed: {source}")]
    Serialize {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SsrError {
    pub fn url(&self) -> &str {
        match self {
            SsrError::Render { url, .. } | SsrError::Serialize { url, .. } => url,
        }
    }
}

/// Map a routing outcome to the response status.
pub fn decide_status(outcome: &RoutingOutcome) -> StatusCode {
    match outcome {
        RoutingOutcome::Redirect(_) => StatusCode::FOUND,
        RoutingOutcome::NotFound => StatusCode::NOT_FOUND,
        RoutingOutcome::Normal => StatusCode::OK,
    }
}

/// The request handler. Cheap to clone; every clone shares the same
/// read-only resources.
#[derive(Clone)]
pub struct SsrPipeline {
    root: Arc<dyn Component>,
    meta: Arc<PageMeta>,
    manifest: Arc<AssetManifest>,
    styles: Arc<StyleResources>,
}

impl SsrPipeline {
    pub fn new(
        root: Arc<dyn Component>,
        meta: PageMeta,
        manifest: AssetManifest,
        styles: StyleResources,
    ) -> Self {
        Self {
            root,
            meta: Arc::new(meta),
            manifest: Arc::new(manifest),
            styles: Arc::new(styles),
        }
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn styles(&self) -> &StyleResources {
        &self.styles
    }

    /// Render `url` against the default initial state.
    pub fn render_page(&self, url: &str) -> Result<RenderedPage, SsrError> {
        self.render_page_with(url, StateOverrides::default())
    }

    /// Render `url` with slices of the initial state replaced.
    pub fn render_page_with(
        &self,
        url: &str,
        overrides: StateOverrides,
    ) -> Result<RenderedPage, SsrError> {
        let start_time = Instant::now();
        let render_err = |source: RenderError| SsrError::Render {
            url: url.to_string(),
            source,
        };

        // 1. Start
        let store = create_store(overrides);
        let mut registry = create_registry();
        let mut generator = create_class_name_generator(self.styles.environment);
        let location = Location::parse(url).map_err(render_err)?;

        // 2. Rendering
        let output = render_to_string(
            self.root.as_ref(),
            &store,
            &location,
            &self.styles,
            &mut registry,
            &mut generator,
        )
        .map_err(render_err)?;

        // 3. Deciding
        let status = decide_status(&output.outcome);
        let redirect_to = match output.outcome {
            RoutingOutcome::Redirect(to) => Some(to),
            _ => None,
        };

        // 4. Responding
        let style_text = registry.serialize();
        let state_json = store.to_json().map_err(|source| SsrError::Serialize {
            url: url.to_string(),
            source,
        })?;
        let stylesheets = self.manifest.stylesheets();
        let scripts = self.manifest.scripts();

        let body = assemble(&DocumentParts {
            fragment: &output.markup,
            title: &self.meta.title,
            description: &self.meta.description,
            favicon: &self.meta.favicon,
            stylesheets: &stylesheets,
            scripts: &scripts,
            state_json: &state_json,
            style_text: &style_text,
        });

        metrics::record_page(status.as_u16(), start_time);
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            location = ?redirect_to,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Page rendered"
        );

        Ok(RenderedPage {
            status,
            location: redirect_to,
            body,
        })
    }
}

impl std::fmt::Debug for SsrPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsrPipeline")
            .field("meta", &self.meta)
            .field("manifest", &self.manifest)
            .field("environment", &self.styles.environment)
            .finish_non_exhaustive()
    }
}
