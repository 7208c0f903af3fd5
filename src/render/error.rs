//! Render failure type.

use thiserror::Error;

use crate::styles::StyleError;

/// Errors raised while walking the component tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The requested URL is not an absolute path.
    #[error("invalid location '{0}': expected an absolute path")]
    InvalidLocation(String),

    /// A component referenced a style rule or module that does not exist.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// A component could not render.
    #[error("component {component} failed: {message}")]
    Component {
        component: &'static str,
        message: String,
    },
}

impl RenderError {
    pub fn component(component: &'static str, message: impl Into<String>) -> Self {
        RenderError::Component {
            component,
            message: message.into(),
        }
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
