//! Styling subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (once):
//!     ThemeConfig → theme.rs (Theme)
//!     modules_dir → modules.rs (StyleModules, scoped names)
//!
//! Per request:
//!     create_registry() + create_class_name_generator()
//!     → components attach sheets / modules while rendering
//!     → registry.rs serialize() → inline <style> text
//! ```
//!
//! # Design Decisions
//! - Theme and modules are read-only and shared; registry and generator
//!   are created per request and dropped with it
//! - Every class a component can emit comes from an attached sheet or
//!   module, so the serialized text covers the rendered markup

pub mod class_names;
pub mod modules;
pub mod registry;
pub mod resources;
pub mod theme;

pub use class_names::{create_class_name_generator, ClassNameGenerator};
pub use modules::{ScopedModule, StyleModuleError, StyleModules};
pub use registry::{create_registry, ClassMap, StyleError, StyleRegistry, StyleRule, StyleSheet};
pub use resources::StyleResources;
pub use theme::{Palette, Theme};
