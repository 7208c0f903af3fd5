//! The application served by the binaries.
//!
//! # Routes
//! ```text
//! /            → Home
//! /home        → redirect to /
//! /posts       → PostsPage
//! /posts/:id   → PostPage (not-found for unknown ids)
//! /about       → About
//! anything else → NotFound (404)
//! ```
//!
//! Every route is wrapped in [`Layout`], whose footer uses the
//! `footer.css` module, so the modules directory must provide it.

pub mod layout;
pub mod pages;
pub mod styles;

use std::sync::Arc;

use crate::render::{Component, Switch};

pub use layout::{Footer, Layout};
pub use pages::{About, Home, NotFound, PostPage, PostsPage};

/// CSS modules the application expects to find at startup.
pub const REQUIRED_MODULES: &[&str] = &["footer.css"];

/// Build the root component.
pub fn build_app(title: impl Into<String>) -> Arc<dyn Component> {
    let routes = Switch::new(NotFound)
        .route("/", Home)
        .redirect("/home", "/")
        .route("/posts", PostsPage)
        .route("/posts/:id", PostPage)
        .route("/about", About);

    Arc::new(Layout::new(title, routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::render::{render_to_string, Location, RoutingOutcome};
    use crate::store::{create_store, Post, PostsState, StateOverrides};
    use crate::styles::{ClassNameGenerator, StyleModules, StyleRegistry, StyleResources, Theme};

    const FOOTER_CSS: &str = include_str!("../../styles/footer.css");

    fn render(url: &str, overrides: StateOverrides) -> (String, RoutingOutcome, String) {
        let app = build_app("Blog");
        let styles = StyleResources::new(
            Environment::Development,
            Theme::default(),
            StyleModules::from_sources([("footer.css", FOOTER_CSS)], Environment::Development),
        );
        let store = create_store(overrides);
        let location = Location::parse(url).unwrap();
        let mut registry = StyleRegistry::new();
        let mut generator = ClassNameGenerator::new(styles.environment);

        let output = render_to_string(
            app.as_ref(),
            &store,
            &location,
            &styles,
            &mut registry,
            &mut generator,
        )
        .unwrap();
        (output.markup, output.outcome, registry.serialize())
    }

    fn with_posts() -> StateOverrides {
        StateOverrides {
            posts: Some(PostsState {
                items: vec![Post::new(1, "Hello", "First post"), Post::new(2, "Again", "Second")],
                loaded: true,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_home() {
        let (markup, outcome, css) = render("/", StateOverrides::default());
        assert_eq!(outcome, RoutingOutcome::Normal);
        assert!(markup.contains("<h1 class=\"Layout-title-"));
        assert!(markup.contains(">Blog</h1>"));
        assert!(markup.contains("Welcome"));
        assert!(css.contains(".footer-page-footer-"));
        assert!(markup.contains("<footer class=\"footer-page-footer-"));
    }

    #[test]
    fn test_posts_list_links() {
        let (markup, _, _) = render("/posts", with_posts());
        assert!(markup.contains("href=\"/posts/1\""));
        assert!(markup.contains("href=\"/posts/2\""));
    }

    #[test]
    fn test_post_page() {
        let (markup, outcome, _) = render("/posts/2", with_posts());
        assert_eq!(outcome, RoutingOutcome::Normal);
        assert!(markup.contains("Second"));
    }

    #[test]
    fn test_encoded_post_id() {
        let (markup, outcome, _) = render("/posts/%31", with_posts());
        assert_eq!(outcome, RoutingOutcome::Normal);
        assert!(markup.contains("First post"));
    }

    #[test]
    fn test_unknown_post_is_not_found() {
        let (markup, outcome, _) = render("/posts/99", with_posts());
        assert_eq!(outcome, RoutingOutcome::NotFound);
        assert!(markup.contains("Page not found"));

        let (_, outcome, _) = render("/posts/abc", with_posts());
        assert_eq!(outcome, RoutingOutcome::NotFound);
    }

    #[test]
    fn test_home_redirect() {
        let (markup, outcome, _) = render("/home", StateOverrides::default());
        assert_eq!(outcome, RoutingOutcome::Redirect("/".into()));
        assert!(markup.contains("<main class=\"Layout-content-"));
        assert!(!markup.contains("Welcome"));
    }

    #[test]
    fn test_active_link() {
        let (markup, _, _) = render("/about", StateOverrides::default());
        assert!(markup.contains("href=\"/about\" class=\"Layout-link-"));
        assert!(markup.contains("Layout-linkActive-"));
    }
}
