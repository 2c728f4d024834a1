//! Post repository
//!
//! - add_one: the foreign key rejects posts for unknown users
//! - get_all: single JOIN attaches the owning user (no N+1)
//! - update_content / delete: predicate on id, no-op when absent

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::User;
use crate::db::{DbError, SessionFactory};
use crate::models::NewPost;

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Post with its owning user loaded in the same query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithUser {
    pub post: Post,
    pub user: User,
}

impl PostWithUser {
    fn from_joined_row(row: &SqliteRow) -> Self {
        Self {
            post: Post {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
                user_id: row.get("user_id"),
            },
            user: User {
                id: row.get("owner_id"),
                username: row.get("owner_username"),
                email: row.get("owner_email"),
                password: row.get("owner_password"),
            },
        }
    }
}

/// Post repository
pub struct PostRepo<'a> {
    sessions: &'a SessionFactory,
}

impl<'a> PostRepo<'a> {
    pub fn new(sessions: &'a SessionFactory) -> Self {
        Self { sessions }
    }

    /// Insert a post and return its generated id.
    ///
    /// Fails with [`DbError::ConstraintViolation`] when `user_id` does not
    /// reference an existing user; no row is written.
    pub async fn add_one(&self, post: NewPost) -> Result<i64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(post_id = id, user_id = post.user_id, "post created");
        Ok(id)
    }

    /// Every post with its owning user, ordered by post id.
    pub async fn get_all(&self) -> Result<Vec<PostWithUser>, DbError> {
        let mut tx = self.sessions.begin().await?;

        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.user_id,
                u.id AS owner_id,
                u.username AS owner_username,
                u.email AS owner_email,
                u.password AS owner_password
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows.iter().map(PostWithUser::from_joined_row).collect())
    }

    /// Posts owned by `user_id`, ordered by id. Empty when there are none.
    pub async fn get_posts(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let mut tx = self.sessions.begin().await?;

        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, title, content, user_id
            FROM posts
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(posts)
    }

    /// Replace one post's content. Returns the number of rows changed.
    pub async fn update_content(&self, post_id: i64, new_content: &str) -> Result<u64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let result = sqlx::query("UPDATE posts SET content = ? WHERE id = ?")
            .bind(new_content)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(post_id, rows = result.rows_affected(), "post content updated");
        Ok(result.rows_affected())
    }

    /// Delete one post. Returns the number of rows removed.
    pub async fn delete(&self, post_id: i64) -> Result<u64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(post_id, rows = result.rows_affected(), "post deleted");
        Ok(result.rows_affected())
    }
}
