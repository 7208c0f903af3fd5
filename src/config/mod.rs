//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SsrConfig (validated, immutable)
//!     → lifecycle::startup builds the read-only pipeline inputs from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the process never reloads it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, resolve_config, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::{
    AppConfig, AssetsConfig, Environment, ListenerConfig, ObservabilityConfig, SsrConfig,
    StylesConfig, ThemeConfig, ThemeKind, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
