//! Post endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::users::UserResponse;
use super::CreatedResponse;
use crate::db::repos::{Post, PostRepo, PostWithUser};
use crate::http::error::ApiError;
use crate::http::extractors::ValidQuery;
use crate::http::server::AppState;
use crate::models::{NewPost, PostContentUpdate, PostId, UserId};

/// Post response
///
/// `user` is only present on `/get-all-posts`, where the owner is
/// eager-loaded.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            user_id: p.user_id,
            user: None,
        }
    }
}

impl From<PostWithUser> for PostResponse {
    fn from(p: PostWithUser) -> Self {
        Self {
            user: Some(UserResponse::from(p.user)),
            ..Self::from(p.post)
        }
    }
}

/// POST /create-post
async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidQuery(post): ValidQuery<NewPost>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = PostRepo::new(&state.sessions).add_one(post).await?;
    Ok(Json(CreatedResponse { id }))
}

/// GET /get-all-posts - each post carries its owner
async fn get_all_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = PostRepo::new(&state.sessions).get_all().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /get-posts - posts of one user
async fn get_posts(
    State(state): State<Arc<AppState>>,
    ValidQuery(UserId { user_id }): ValidQuery<UserId>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = PostRepo::new(&state.sessions).get_posts(user_id).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// PUT /update-post-content - unknown ids are ignored
async fn update_post_content(
    State(state): State<Arc<AppState>>,
    ValidQuery(update): ValidQuery<PostContentUpdate>,
) -> Result<StatusCode, ApiError> {
    PostRepo::new(&state.sessions)
        .update_content(update.post_id, &update.new_content)
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /delete-post - unknown ids are ignored
async fn delete_post(
    State(state): State<Arc<AppState>>,
    ValidQuery(PostId { post_id }): ValidQuery<PostId>,
) -> Result<StatusCode, ApiError> {
    PostRepo::new(&state.sessions).delete(post_id).await?;
    Ok(StatusCode::OK)
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-post", post(create_post))
        .route("/get-all-posts", get(get_all_posts))
        .route("/get-posts", get(get_posts))
        .route("/update-post-content", put(update_post_content))
        .route("/delete-post", delete(delete_post))
}
