//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the SSR server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the SSR server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SsrConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Page metadata shown in every rendered document.
    pub app: AppConfig,

    /// Bundler output: manifest and static files.
    pub assets: AssetsConfig,

    /// Style naming and CSS-module settings.
    pub styles: StylesConfig,

    /// Theme palette handed to component style functions.
    pub theme: ThemeConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Application metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document `<title>`.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Favicon URL. Empty means no icon link.
    pub favicon: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Universal App".to_string(),
            description: "Server-rendered application".to_string(),
            favicon: String::new(),
        }
    }
}

/// Bundler output locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Path to the JSON asset manifest written by the bundler.
    pub manifest_path: String,

    /// Directory holding the built static files.
    pub public_dir: String,

    /// URL prefix the static files are served under.
    pub public_path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            manifest_path: "build/assets.json".to_string(),
            public_dir: "build/public".to_string(),
            public_path: "/assets".to_string(),
        }
    }
}

/// Which naming strategy class names follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Human-readable names with a short hash.
    Development,
    /// Hash-only names.
    #[default]
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// Style settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Naming strategy for generated and scoped class names.
    pub environment: Environment,

    /// Directory of CSS-module files, loaded once at startup.
    pub modules_dir: String,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            modules_dir: "styles".to_string(),
        }
    }
}

/// Light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

/// Theme palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary colour (hex).
    pub primary: String,

    /// Accent colour (hex).
    pub accent: String,

    /// Palette type.
    pub kind: ThemeKind,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#4caf50".to_string(),
            accent: "#f44336".to_string(),
            kind: ThemeKind::Light,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SsrConfig = toml::from_str(
            r#"
            [app]
            title = "Blog"

            [styles]
            environment = "development"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.title, "Blog");
        assert_eq!(config.app.description, "Server-rendered application");
        assert_eq!(config.styles.environment, Environment::Development);
        assert_eq!(config.styles.modules_dir, "styles");
        assert_eq!(config.theme.primary, "#4caf50");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }
}
