//! Route switching during render.
//!
//! # Responsibilities
//! - Pick the first entry whose pattern matches the location
//! - Render the matched page with its captured params
//! - Raise redirect / not-found signals on the render context
//!
//! # Design Decisions
//! - Entries are checked in declaration order; first match wins
//! - A redirect renders nothing below it
//! - No match renders the fallback view and raises not-found

use crate::render::component::Component;
use crate::render::context::RenderContext;
use crate::render::error::RenderResult;
use crate::render::matcher::{PathMatcher, RoutePattern};
use crate::render::node::Node;

enum Entry {
    Page {
        matcher: Box<dyn PathMatcher>,
        component: Box<dyn Component>,
    },
    Redirect {
        matcher: Box<dyn PathMatcher>,
        to: String,
    },
}

/// A set of routes with a not-found fallback.
pub struct Switch {
    entries: Vec<Entry>,
    fallback: Box<dyn Component>,
}

impl Switch {
    pub fn new(fallback: impl Component + 'static) -> Self {
        Self {
            entries: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Render `component` when the path matches `pattern` exactly.
    pub fn route(self, pattern: &str, component: impl Component + 'static) -> Self {
        self.matching(RoutePattern::exact(pattern), component)
    }

    /// Render `component` for `pattern` and everything below it.
    pub fn nest(self, pattern: &str, component: impl Component + 'static) -> Self {
        self.matching(RoutePattern::prefix(pattern), component)
    }

    /// Render `component` when `matcher` matches.
    pub fn matching(
        mut self,
        matcher: impl PathMatcher + 'static,
        component: impl Component + 'static,
    ) -> Self {
        self.entries.push(Entry::Page {
            matcher: Box::new(matcher),
            component: Box::new(component),
        });
        self
    }

    /// Redirect an exact path to `to`.
    pub fn redirect(mut self, from: &str, to: impl Into<String>) -> Self {
        self.entries.push(Entry::Redirect {
            matcher: Box::new(RoutePattern::exact(from)),
            to: to.into(),
        });
        self
    }
}

impl Component for Switch {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let path = cx.location().path();

        for entry in &self.entries {
            match entry {
                Entry::Page { matcher, component } => {
                    if let Some(params) = matcher.match_path(path) {
                        return cx.with_params(params, |cx| component.render(cx));
                    }
                }
                Entry::Redirect { matcher, to } => {
                    if matcher.match_path(path).is_some() {
                        tracing::debug!(from = %path, to = %to, "Route redirect");
                        cx.redirect(to.clone());
                        return Ok(Node::Empty);
                    }
                }
            }
        }

        tracing::debug!(path = %path, "No route matched");
        cx.not_found();
        self.fallback.render(cx)
    }
}
