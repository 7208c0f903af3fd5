//! Per-render context handed to every component.

use crate::render::error::RenderResult;
use crate::render::location::Location;
use crate::render::matcher::Params;
use crate::store::State;
use crate::styles::{
    ClassMap, ClassNameGenerator, ScopedModule, StyleModules, StyleRegistry, StyleSheet, Theme,
};

/// What routing decided during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingOutcome {
    /// Every route matcher found a match.
    Normal,
    /// A matcher asked for a redirect to this URL.
    Redirect(String),
    /// Some matcher found no route.
    NotFound,
}

/// Signals raised by route matchers while the tree renders.
///
/// Only readable through [`RoutingSignals::into_outcome`], after rendering.
#[derive(Debug, Default)]
struct RoutingSignals {
    redirect: Option<String>,
    not_found: bool,
}

impl RoutingSignals {
    /// Redirect wins over not-found.
    fn into_outcome(self) -> RoutingOutcome {
        match (self.redirect, self.not_found) {
            (Some(url), _) => RoutingOutcome::Redirect(url),
            (None, true) => RoutingOutcome::NotFound,
            (None, false) => RoutingOutcome::Normal,
        }
    }
}

/// Everything a component may read or register while rendering.
pub struct RenderContext<'a> {
    state: &'a State,
    location: &'a Location,
    theme: &'a Theme,
    modules: &'a StyleModules,
    registry: &'a mut StyleRegistry,
    generator: &'a mut ClassNameGenerator,
    params: Params,
    signals: RoutingSignals,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        state: &'a State,
        location: &'a Location,
        theme: &'a Theme,
        modules: &'a StyleModules,
        registry: &'a mut StyleRegistry,
        generator: &'a mut ClassNameGenerator,
    ) -> Self {
        Self {
            state,
            location,
            theme,
            modules,
            registry,
            generator,
            params: Params::default(),
            signals: RoutingSignals::default(),
        }
    }

    pub fn state(&self) -> &'a State {
        self.state
    }

    pub fn location(&self) -> &'a Location {
        self.location
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Attach a sheet for this render and get its class names.
    pub fn use_styles(&mut self, sheet: &StyleSheet) -> ClassMap {
        self.registry.attach(sheet, self.generator)
    }

    /// Attach a CSS module for this render and get its scoped names.
    pub fn use_module(&mut self, file: &str) -> RenderResult<&'a ScopedModule> {
        let modules = self.modules;
        let module = modules.get(file)?;
        self.registry
            .attach_css(&format!("module:{}", file), module.css(), module.classes());
        Ok(module)
    }

    /// Ask for a redirect. The first request in render order wins.
    pub fn redirect(&mut self, to: impl Into<String>) {
        if self.signals.redirect.is_none() {
            self.signals.redirect = Some(to.into());
        }
    }

    /// Record that a matcher found no route.
    pub fn not_found(&mut self) {
        self.signals.not_found = true;
    }

    /// Run `f` with `params` added to the current params.
    pub fn with_params<R>(&mut self, params: Params, f: impl FnOnce(&mut Self) -> R) -> R {
        let merged = self.params.merged(params);
        let outer = std::mem::replace(&mut self.params, merged);
        let result = f(self);
        self.params = outer;
        result
    }

    pub(crate) fn finish(self) -> RoutingOutcome {
        self.signals.into_outcome()
    }
}
