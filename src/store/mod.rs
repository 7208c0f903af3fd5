//! Application state subsystem.
//!
//! # Data Flow
//! ```text
//! Per request:
//!     factory.rs (create_store with overrides)
//!     → Store (exclusively owned by the request)
//!     → components read state while rendering
//!     → Store::to_json snapshot embedded in the document
//!     → dropped with the request
//! ```
//!
//! # Design Decisions
//! - No store outlives one request; nothing is pooled or reused
//! - Creation is allocation only (no I/O)
//! - The reducer is pure so client and server agree on transitions

pub mod factory;
pub mod reducer;
pub mod state;

pub use factory::{create_store, StateOverrides, Store};
pub use reducer::{reduce, Action};
pub use state::{AppState, Post, PostsState, State};
