//! Bundler asset manifest.
//!
//! The bundler writes a JSON file mapping each bundle to the URLs it was
//! emitted under:
//!
//! ```json
//! {
//!   "client": { "js": "/assets/client.3f2a.js", "css": "/assets/client.3f2a.css" },
//!   "vendor": { "js": "/assets/vendor.91bc.js" }
//! }
//! ```
//!
//! Only the three logical entries `client.css`, `vendor.js` and `client.js`
//! are read. `client.css` is optional; development builds often inline
//! their styles and omit it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read asset manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid asset manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("asset manifest has no '{0}' entry")]
    MissingEntry(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    client: Option<RawBundle>,
    vendor: Option<RawBundle>,
}

#[derive(Debug, Deserialize)]
struct RawBundle {
    js: Option<String>,
    css: Option<String>,
}

/// Read-only mapping from logical bundle names to served URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    client_css: Option<String>,
    vendor_js: String,
    client_js: String,
}

impl AssetManifest {
    pub fn new(
        client_css: Option<String>,
        vendor_js: impl Into<String>,
        client_js: impl Into<String>,
    ) -> Self {
        Self {
            client_css,
            vendor_js: vendor_js.into(),
            client_js: client_js.into(),
        }
    }

    /// Load the manifest from the bundler's JSON output.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse manifest JSON, requiring both script bundles.
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(content)?;

        let (client_js, client_css) = match raw.client {
            Some(bundle) => (bundle.js, bundle.css),
            None => (None, None),
        };
        let vendor_js = raw.vendor.and_then(|bundle| bundle.js);

        Ok(Self {
            client_css,
            vendor_js: vendor_js.ok_or(ManifestError::MissingEntry("vendor.js"))?,
            client_js: client_js.ok_or(ManifestError::MissingEntry("client.js"))?,
        })
    }

    /// Stylesheet URLs in link order.
    pub fn stylesheets(&self) -> Vec<&str> {
        self.client_css.iter().map(String::as_str).collect()
    }

    /// Script URLs in load order: vendor bundle before application bundle.
    pub fn scripts(&self) -> Vec<&str> {
        vec![self.vendor_js.as_str(), self.client_js.as_str()]
    }
}
