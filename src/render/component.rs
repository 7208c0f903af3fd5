//! Component trait.

use crate::render::context::RenderContext;
use crate::render::error::RenderResult;
use crate::render::node::Node;

/// A piece of UI that renders against a [`RenderContext`].
///
/// Components hold no per-request data; one tree is shared read-only by
/// every request.
pub trait Component: Send + Sync {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node>;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        (**self).render(cx)
    }
}

impl<C: Component + ?Sized> Component for std::sync::Arc<C> {
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        (**self).render(cx)
    }
}

/// A component backed by a closure.
pub struct FnComponent<F> {
    f: F,
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&mut RenderContext<'_>) -> RenderResult<Node> + Send + Sync,
{
    fn render(&self, cx: &mut RenderContext<'_>) -> RenderResult<Node> {
        (self.f)(cx)
    }
}

/// Build a component from a closure.
pub fn from_fn<F>(f: F) -> FnComponent<F>
where
    F: Fn(&mut RenderContext<'_>) -> RenderResult<Node> + Send + Sync,
{
    FnComponent { f }
}
