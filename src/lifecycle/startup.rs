//! Startup orchestration.
//!
//! Builds the read-only objects every request shares, in order: asset
//! manifest, style modules, theme, component tree. Any failure is fatal.

use std::path::Path;

use thiserror::Error;

use crate::app::{build_app, REQUIRED_MODULES};
use crate::assets::{AssetManifest, ManifestError};
use crate::config::SsrConfig;
use crate::pipeline::{PageMeta, SsrPipeline};
use crate::styles::{StyleModuleError, StyleModules, StyleResources};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    StyleModules(#[from] StyleModuleError),

    #[error("style module '{0}' is required but was not found")]
    MissingModule(&'static str),
}

/// Load everything the pipeline reads and build it.
pub fn bootstrap(config: &SsrConfig) -> Result<SsrPipeline, StartupError> {
    let manifest = AssetManifest::load(Path::new(&config.assets.manifest_path))?;
    tracing::info!(
        path = %config.assets.manifest_path,
        scripts = ?manifest.scripts(),
        stylesheets = ?manifest.stylesheets(),
        "Asset manifest loaded"
    );

    let modules = StyleModules::load_dir(
        Path::new(&config.styles.modules_dir),
        config.styles.environment,
    )?;
    bootstrap_with(config, manifest, modules)
}

/// Build the pipeline from already-loaded resources.
pub fn bootstrap_with(
    config: &SsrConfig,
    manifest: AssetManifest,
    modules: StyleModules,
) -> Result<SsrPipeline, StartupError> {
    for &required in REQUIRED_MODULES {
        if modules.get(required).is_err() {
            return Err(StartupError::MissingModule(required));
        }
    }
    tracing::info!(
        count = modules.len(),
        environment = ?config.styles.environment,
        "Style modules compiled"
    );

    let styles = StyleResources::from_config(&config.styles, &config.theme).with_modules(modules);
    let root = build_app(config.app.title.clone());

    Ok(SsrPipeline::new(root, PageMeta::from(&config.app), manifest, styles))
}
