//! Process-wide style inputs.

use crate::config::{Environment, StylesConfig, ThemeConfig};
use crate::styles::modules::StyleModules;
use crate::styles::theme::Theme;

/// Read-only style configuration built once at startup and shared by
/// every render.
#[derive(Debug, Clone)]
pub struct StyleResources {
    pub environment: Environment,
    pub theme: Theme,
    pub modules: StyleModules,
}

impl StyleResources {
    pub fn new(environment: Environment, theme: Theme, modules: StyleModules) -> Self {
        Self {
            environment,
            theme,
            modules,
        }
    }

    /// Resources without CSS modules.
    pub fn from_config(styles: &StylesConfig, theme: &ThemeConfig) -> Self {
        Self::new(styles.environment, Theme::from_config(theme), StyleModules::empty())
    }

    pub fn with_modules(mut self, modules: StyleModules) -> Self {
        self.modules = modules;
        self
    }
}
