//! State transitions.

use crate::store::state::{Post, State};

/// Actions understood by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleDrawer,
    PostsLoaded(Vec<Post>),
    PostAdded(Post),
}

/// Apply an action, producing the next state.
pub fn reduce(mut state: State, action: Action) -> State {
    match action {
        Action::ToggleDrawer => {
            state.app.drawer_open = !state.app.drawer_open;
        }
        Action::PostsLoaded(items) => {
            state.posts.items = items;
            state.posts.loaded = true;
        }
        Action::PostAdded(post) => {
            // Ids are unique; a re-added post replaces the old one in place.
            match state.posts.items.iter_mut().find(|p| p.id == post.id) {
                Some(existing) => *existing = post,
                None => state.posts.items.push(post),
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_drawer() {
        let state = reduce(State::default(), Action::ToggleDrawer);
        assert!(state.app.drawer_open);
        let state = reduce(state, Action::ToggleDrawer);
        assert!(!state.app.drawer_open);
    }

    #[test]
    fn test_posts_loaded_marks_loaded() {
        let state = reduce(
            State::default(),
            Action::PostsLoaded(vec![Post::new(1, "Hello", "World")]),
        );
        assert!(state.posts.loaded);
        assert_eq!(state.posts.items.len(), 1);
    }

    #[test]
    fn test_post_added_replaces_same_id() {
        let state = reduce(State::default(), Action::PostAdded(Post::new(1, "v1", "")));
        let state = reduce(state, Action::PostAdded(Post::new(2, "other", "")));
        let state = reduce(state, Action::PostAdded(Post::new(1, "v2", "")));

        assert_eq!(state.posts.items.len(), 2);
        assert_eq!(state.posts.items[0].title, "v2");
    }
}
