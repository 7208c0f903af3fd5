//! Per-request store construction.

use crate::store::reducer::{reduce, Action};
use crate::store::state::{AppState, PostsState, State};

/// Optional slice replacements applied over the default state.
#[derive(Debug, Clone, Default)]
pub struct StateOverrides {
    pub app: Option<AppState>,
    pub posts: Option<PostsState>,
}

/// A state container owned by exactly one request.
///
/// Created, rendered against, serialized and dropped within that request.
#[derive(Debug)]
pub struct Store {
    state: State,
}

impl Store {
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    /// Serialize the current state for embedding in the document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }
}

/// Create a fresh store seeded with the canonical state shape.
pub fn create_store(overrides: StateOverrides) -> Store {
    let defaults = State::default();
    let state = State {
        app: overrides.app.unwrap_or(defaults.app),
        posts: overrides.posts.unwrap_or(defaults.posts),
    };
    Store { state }
}
