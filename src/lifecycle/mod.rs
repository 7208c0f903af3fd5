//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     SsrConfig → AssetManifest + StyleModules + Theme + component tree
//!     → SsrPipeline (shared, read-only)
//!
//! Shutdown (shutdown.rs):
//!     trigger() or Ctrl+C → stop accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Resources load once; nothing is reloaded while serving
//! - Listeners start last (traffic only when ready)

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{bootstrap, bootstrap_with, StartupError};
