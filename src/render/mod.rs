//! Component rendering subsystem.
//!
//! # Data Flow
//! ```text
//! root Component + Store + Location + StyleResources
//!     → renderer.rs (build RenderContext)
//!     → component.rs tree walk (components read state, attach styles)
//!     → router.rs Switch entries (matcher.rs) raise redirect / not-found
//!     → node.rs serialize to markup
//!     → RenderOutput { markup, outcome }
//! ```
//!
//! # Design Decisions
//! - Rendering is synchronous and performs no I/O
//! - Routing decisions come back as one `RoutingOutcome` value, never as
//!   a side object the caller inspects
//! - Errors abort the render; there is no partial output

pub mod component;
pub mod context;
pub mod error;
pub mod location;
pub mod matcher;
pub mod node;
pub mod renderer;
pub mod router;

pub use component::{from_fn, Component, FnComponent};
pub use context::{RenderContext, RoutingOutcome};
pub use error::{RenderError, RenderResult};
pub use location::Location;
pub use matcher::{Params, PathMatcher, RoutePattern};
pub use node::{el, Element, Node};
pub use renderer::{render_to_string, RenderOutput};
pub use router::Switch;
