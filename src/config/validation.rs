//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check theme colours and URL prefixes are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SsrConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SsrConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("app.title must not be empty")]
    EmptyTitle,

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("{field} '{value}' is not a hex colour")]
    InvalidColour { field: &'static str, value: String },

    #[error("assets.public_path '{0}' must start with '/' and name a directory below the root")]
    InvalidPublicPath(String),

    #[error("assets.manifest_path must not be empty")]
    EmptyManifestPath,
}

/// Check a parsed configuration, collecting every problem.
pub fn validate_config(config: &SsrConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.app.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (field, value) in [
        ("theme.primary", &config.theme.primary),
        ("theme.accent", &config.theme.accent),
    ] {
        if !is_hex_colour(value) {
            errors.push(ValidationError::InvalidColour {
                field,
                value: value.clone(),
            });
        }
    }

    let public_path = &config.assets.public_path;
    if !public_path.starts_with('/') || public_path.len() < 2 || public_path.ends_with('/') {
        errors.push(ValidationError::InvalidPublicPath(
            config.assets.public_path.clone(),
        ));
    }

    if config.assets.manifest_path.trim().is_empty() {
        errors.push(ValidationError::EmptyManifestPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_colour(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SsrConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SsrConfig::default();
        config.app.title = "  ".into();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.theme.accent = "red".into();
        config.assets.public_path = "assets".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptyTitle));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidPublicPath("assets".into())));
    }

    #[test]
    fn test_public_path_cannot_be_root() {
        for path in ["/", "/assets/"] {
            let mut config = SsrConfig::default();
            config.assets.public_path = path.into();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::InvalidPublicPath(path.into())])
            );
        }
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SsrConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_hex_colour() {
        assert!(is_hex_colour("#fff"));
        assert!(is_hex_colour("#4caf50"));
        assert!(!is_hex_colour("4caf50"));
        assert!(!is_hex_colour("#4caf5"));
        assert!(!is_hex_colour("#ggg"));
    }
}
