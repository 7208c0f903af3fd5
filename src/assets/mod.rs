//! Asset manifest subsystem.
//!
//! # Data Flow
//! ```text
//! bundler output (assets.json)
//!     → manifest.rs (parse, require script bundles)
//!     → AssetManifest (immutable, shared via Arc)
//!     → document assembler reads stylesheet/script URLs per request
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; a missing manifest is a startup failure
//! - Lookup returns URLs in a fixed order so asset load order is deterministic

pub mod manifest;

pub use manifest::{AssetManifest, ManifestError};
