//! Page chrome: header, navigation drawer, content area and footer.

use crate::app::styles;
use crate::render::{el, Component, Node, RenderContext, RenderResult, Switch};

const NAV: &[(&str, &str)] = &[("/", "Home"), ("/posts", "Posts"), ("/about", "About")];

/// Wraps the routed content in the shared chrome.
pub struct Layout {
    title: String,
    content: Switch,
}

impl Layout {
    pub fn new(title: impl Into<String>, content: Switch) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

impl Component for Layout {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let classes = cx.use_styles(&styles::layout(cx.theme()));
        let drawer = if cx.state().app.drawer_open {
            classes.get("drawerOpen")?
        } else {
            classes.get("drawer")?
        };

        let current = cx.location().path();
        let mut links: Vec<Node> = Vec::with_capacity(NAV.len());
        for (href, label) in NAV {
            let mut link = el("a").attr("href", *href).class(classes.get("link")?);
            if current == *href {
                link = link.class(classes.get("linkActive")?);
            }
            links.push(link.child(*label).into());
        }

        let header = el("header")
            .class(classes.get("header")?)
            .child(el("h1").class(classes.get("title")?).child(self.title.as_str()));
        let nav = el("nav").class(drawer).children(links);
        let main = el("main")
            .class(classes.get("content")?)
            .child(self.content.render(cx)?);
        let footer = Footer.render(cx)?;

        Ok(el("div")
            .class(classes.get("root")?)
            .children([header.into(), nav.into(), main.into(), footer])
            .into())
    }
}

/// Footer styled by the `footer.css` module.
pub struct Footer;

impl Component for Footer {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        let module = cx.use_module("footer.css")?;

        Ok(el("footer")
            .class(module.class("pageFooter")?)
            .child(
                el("span")
                    .class(module.class("copyright")?)
                    .child("Rendered on the server"),
            )
            .into())
    }
}
