//! Canonical application state shape.
//!
//! Field names serialize in camelCase so the embedded snapshot matches what
//! the client store expects on hydration.

use serde::{Deserialize, Serialize};

/// Root of the application state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub app: AppState,
    pub posts: PostsState,
}

/// Shell UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub drawer_open: bool,
}

/// Post listing state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsState {
    pub items: Vec<Post>,
    pub loaded: bool,
}

impl PostsState {
    pub fn find(&self, id: u64) -> Option<&Post> {
        self.items.iter().find(|post| post.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let state = State::default();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "app": { "drawerOpen": false },
                "posts": { "items": [], "loaded": false }
            })
        );
    }

    #[test]
    fn test_find_post() {
        let posts = PostsState {
            items: vec![Post::new(1, "a", "b"), Post::new(7, "c", "d")],
            loaded: true,
        };
        assert_eq!(posts.find(7).map(|p| p.title.as_str()), Some("c"));
        assert!(posts.find(2).is_none());
    }
}
