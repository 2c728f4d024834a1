//! Post inputs

use serde::Deserialize;

/// Fields of a post to be inserted. `user_id` must name an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Selects a single post by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PostId {
    pub post_id: i64,
}

/// Replacement content for one post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostContentUpdate {
    pub post_id: i64,
    pub new_content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
        }
    }
}
