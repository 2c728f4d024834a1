//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::CreatedResponse;
use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidQuery;
use crate::http::server::AppState;
use crate::models::{NewUser, UserEmailUpdate, UserId};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            password: u.password,
        }
    }
}

/// POST /create-user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidQuery(user): ValidQuery<NewUser>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = UserRepo::new(&state.sessions).add_one(user).await?;
    Ok(Json(CreatedResponse { id }))
}

/// GET /get-all-users
async fn get_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.sessions).get_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PUT /update-user-email - unknown ids are ignored
async fn update_user_email(
    State(state): State<Arc<AppState>>,
    ValidQuery(update): ValidQuery<UserEmailUpdate>,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.sessions)
        .update_email(update.user_id, &update.new_email)
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /delete-user - removes the user's posts too
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidQuery(UserId { user_id }): ValidQuery<UserId>,
) -> Result<StatusCode, ApiError> {
    let posts_removed = UserRepo::new(&state.sessions).delete(user_id).await?;
    tracing::info!(user_id, posts_removed, "user deleted");
    Ok(StatusCode::OK)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/get-all-users", get(get_all_users))
        .route("/update-user-email", put(update_user_email))
        .route("/delete-user", delete(delete_user))
}
