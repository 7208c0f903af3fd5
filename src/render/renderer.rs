//! Component tree renderer.

use crate::render::component::Component;
use crate::render::context::{RenderContext, RoutingOutcome};
use crate::render::error::RenderResult;
use crate::render::location::Location;
use crate::store::Store;
use crate::styles::{ClassNameGenerator, StyleRegistry, StyleResources};

/// Markup plus the routing decision reached while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub markup: String,
    pub outcome: RoutingOutcome,
}

/// Render `root` against one request's store and location.
///
/// Synchronous and deterministic: the same state, location and shared
/// style resources always yield the same markup and the same sheets in
/// `registry`. Any component error aborts the whole render.
pub fn render_to_string(
    root: &dyn Component,
    store: &Store,
    location: &Location,
    styles: &StyleResources,
    registry: &mut StyleRegistry,
    generator: &mut ClassNameGenerator,
) -> RenderResult<RenderOutput> {
    let mut cx = RenderContext::new(
        store.state(),
        location,
        &styles.theme,
        &styles.modules,
        registry,
        generator,
    );

    let node = root.render(&mut cx)?;
    let outcome = cx.finish();

    Ok(RenderOutput {
        markup: node.to_html(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::render::component::from_fn;
    use crate::render::error::RenderError;
    use crate::render::node::{el, Node};
    use crate::render::router::Switch;
    use crate::store::{create_store, StateOverrides};
    use crate::styles::{StyleModules, StyleSheet, Theme};

    fn resources() -> StyleResources {
        StyleResources::new(Environment::Development, Theme::default(), StyleModules::empty())
    }

    fn render(root: &dyn Component, url: &str) -> (RenderResult<RenderOutput>, String) {
        let store = create_store(StateOverrides::default());
        let location = Location::parse(url).unwrap();
        let styles = resources();
        let mut registry = StyleRegistry::new();
        let mut generator = ClassNameGenerator::new(styles.environment);
        let result = render_to_string(
            root,
            &store,
            &location,
            &styles,
            &mut registry,
            &mut generator,
        );
        (result, registry.serialize())
    }

    fn styled(name: &'static str, text: &'static str) -> impl Component {
        from_fn(move |cx| {
            let sheet = StyleSheet::new(name).rule("root", &[("color", "red")]);
            let classes = cx.use_styles(&sheet);
            Ok(el("p").class(classes.get("root")?).child(text).into())
        })
    }

    fn app() -> Switch {
        Switch::new(styled("Missing", "not found"))
            .route("/", styled("Home", "home"))
            .route("/users/:id", from_fn(|cx| {
                let id = cx.param("id").unwrap_or_default().to_string();
                Ok(el("span").child(id).into())
            }))
            .redirect("/old", "/")
    }

    #[test]
    fn test_normal_render() {
        let (result, css) = render(&app(), "/");
        let output = result.unwrap();
        assert_eq!(output.outcome, RoutingOutcome::Normal);
        assert_eq!(output.markup, "<p class=\"Home-root-1\">home</p>");
        assert_eq!(css, ".Home-root-1 {\n  color: red;\n}");
    }

    #[test]
    fn test_params_reach_component() {
        let (result, _) = render(&app(), "/users/ada?tab=posts");
        assert_eq!(result.unwrap().markup, "<span>ada</span>");
    }

    #[test]
    fn test_redirect_renders_nothing() {
        let (result, css) = render(&app(), "/old");
        let output = result.unwrap();
        assert_eq!(output.outcome, RoutingOutcome::Redirect("/".into()));
        assert_eq!(output.markup, "");
        assert_eq!(css, "");
    }

    #[test]
    fn test_not_found_renders_fallback() {
        let (result, css) = render(&app(), "/nowhere");
        let output = result.unwrap();
        assert_eq!(output.outcome, RoutingOutcome::NotFound);
        assert_eq!(output.markup, "<p class=\"Missing-root-1\">not found</p>");
        assert!(css.contains(".Missing-root-1"));
    }

    #[test]
    fn test_redirect_wins_over_not_found() {
        // An outer switch misses while a sibling switch redirects.
        let root = from_fn(|cx| {
            let sidebar =
                Switch::new(from_fn(|_| Ok(Node::Empty))).route("/", from_fn(|_| Ok(Node::Empty)));
            let main = Switch::new(from_fn(|_| Ok(Node::Empty))).redirect("/gone", "/x");
            Ok(Node::fragment([sidebar.render(cx)?, main.render(cx)?]))
        });

        let (result, _) = render(&root, "/gone");
        assert_eq!(result.unwrap().outcome, RoutingOutcome::Redirect("/x".into()));
    }

    #[test]
    fn test_first_redirect_wins() {
        let root = from_fn(|cx| {
            cx.redirect("/first");
            cx.redirect("/second");
            Ok(Node::Empty)
        });
        let (result, _) = render(&root, "/");
        assert_eq!(result.unwrap().outcome, RoutingOutcome::Redirect("/first".into()));
    }

    #[test]
    fn test_nested_switch_keeps_outer_params() {
        let inner = Switch::new(from_fn(|_| Ok(Node::text("no tab"))))
            .route("/teams/:team/:tab", from_fn(|cx| {
                Ok(Node::text(format!(
                    "{}/{}",
                    cx.param("team").unwrap_or("?"),
                    cx.param("tab").unwrap_or("?")
                )))
            }));
        let outer = Switch::new(from_fn(|_| Ok(Node::Empty))).matching(
            crate::render::matcher::RoutePattern::prefix("/teams/:team"),
            inner,
        );

        let (result, _) = render(&outer, "/teams/core/members");
        assert_eq!(result.unwrap().markup, "core/members");
    }

    #[test]
    fn test_component_error_propagates() {
        let root = Switch::new(from_fn(|_| Ok(Node::Empty))).route(
            "/",
            from_fn(|_| Err(RenderError::component("Broken", "no data"))),
        );
        let (result, _) = render(&root, "/");
        assert_eq!(
            result.unwrap_err().to_string(),
            "component Broken failed: no data"
        );
    }

    #[test]
    fn test_unknown_module_is_render_error() {
        let root = from_fn(|cx| {
            cx.use_module("missing.css")?;
            Ok(Node::Empty)
        });
        let (result, _) = render(&root, "/");
        assert!(matches!(result, Err(RenderError::Style(_))));
    }

    #[test]
    fn test_deterministic() {
        let (a, css_a) = render(&app(), "/");
        let (b, css_b) = render(&app(), "/");
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(css_a, css_b);
    }
}
