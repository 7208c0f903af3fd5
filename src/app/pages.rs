//! Routed page components.

use crate::app::styles;
use crate::render::{el, Component, Node, RenderContext, RenderResult};

pub struct Home;

impl Component for Home {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let posts = &cx.state().posts;
        let summary = if posts.loaded {
            format!("{} posts published.", posts.items.len())
        } else {
            "Posts load in the browser.".to_string()
        };

        Ok(Node::fragment([
            Node::from(el("h2").child("Welcome")),
            el("p").child(summary).into(),
        ]))
    }
}

/// List of every post in the state.
pub struct PostsPage;

impl Component for PostsPage {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let classes = cx.use_styles(&styles::posts(cx.theme()));
        let posts = &cx.state().posts;

        if posts.items.is_empty() {
            return Ok(el("p").class(classes.get("empty")?).child("No posts yet.").into());
        }

        let mut items: Vec<Node> = Vec::with_capacity(posts.items.len());
        for post in &posts.items {
            let link = el("a")
                .attr("href", format!("/posts/{}", post.id))
                .class(classes.get("link")?)
                .child(post.title.as_str());
            items.push(el("li").class(classes.get("item")?).child(link).into());
        }

        Ok(el("ul").class(classes.get("list")?).children(items).into())
    }
}

/// A single post, addressed by the `:id` route param.
///
/// An id that does not parse or does not exist is a not-found.
pub struct PostPage;

impl Component for PostPage {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let post = cx
            .param("id")
            .and_then(|id| id.parse::<u64>().ok())
            .and_then(|id| cx.state().posts.find(id));

        let Some(post) = post else {
            cx.not_found();
            return NotFound.render(cx);
        };

        let classes = cx.use_styles(&styles::article(cx.theme()));
        Ok(el("article")
            .children([
                Node::from(el("h2").class(classes.get("heading")?).child(post.title.as_str())),
                el("p").class(classes.get("body")?).child(post.body.as_str()).into(),
                el("a")
                    .attr("href", "/posts")
                    .class(classes.get("back")?)
                    .child("All posts")
                    .into(),
            ])
            .into())
    }
}

pub struct About;

impl Component for About {
    fn render(&self, _cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        Ok(Node::fragment([
            Node::from(el("h2").child("About")),
            el("p")
                .child("Every page is rendered on the server and hydrated in the browser.")
                .into(),
        ]))
    }
}

/// Shown for any path no route claims.
pub struct NotFound;

impl Component for NotFound {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let classes = cx.use_styles(&styles::not_found(cx.theme()));
        Ok(el("section")
            .class(classes.get("root")?)
            .children([
                Node::from(el("h2").class(classes.get("code")?).child("404")),
                el("p").child("Page not found").into(),
                el("a").attr("href", "/").child("Back home").into(),
            ])
            .into())
    }
}
