//! User repository
//!
//! - add_one: INSERT ... RETURNING id in one statement
//! - update_email: targeted single-column UPDATE, no-op when absent
//! - delete: store-level cascade removes the user's posts

use sqlx::FromRow;

use crate::db::{DbError, SessionFactory};
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User repository
pub struct UserRepo<'a> {
    sessions: &'a SessionFactory,
}

impl<'a> UserRepo<'a> {
    pub fn new(sessions: &'a SessionFactory) -> Self {
        Self { sessions }
    }

    /// Insert a user and return its generated id.
    pub async fn add_one(&self, user: NewUser) -> Result<i64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(user_id = id, "user created");
        Ok(id)
    }

    /// Every user, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbError> {
        let mut tx = self.sessions.begin().await?;

        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(users)
    }

    /// Replace one user's email. Returns the number of rows changed,
    /// which is zero when no user has `user_id`.
    pub async fn update_email(&self, user_id: i64, new_email: &str) -> Result<u64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let result = sqlx::query("UPDATE users SET email = ? WHERE id = ?")
            .bind(new_email)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(user_id, rows = result.rows_affected(), "user email updated");
        Ok(result.rows_affected())
    }

    /// Delete a user together with all of its posts.
    ///
    /// Returns how many posts the cascade removed. Fails with
    /// [`DbError::NotFound`] when no user has `user_id`; nothing is
    /// written in that case.
    pub async fn delete(&self, user_id: i64) -> Result<i64, DbError> {
        let mut tx = self.sessions.begin().await?;

        let posts_removed: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "user",
                id: user_id.to_string(),
            });
        }

        tx.commit().await?;
        tracing::debug!(user_id, posts_removed, "user deleted");
        Ok(posts_removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PostRepo;
    use crate::models::NewPost;

    async fn sessions() -> SessionFactory {
        SessionFactory::in_memory().await.expect("in-memory factory")
    }

    fn alice() -> NewUser {
        NewUser::new("alice", "a@x.com", "pw")
    }

    #[tokio::test]
    async fn add_then_get_all_returns_matching_user() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);

        let id = repo.add_one(alice()).await.unwrap();
        let users = repo.get_all().await.unwrap();

        assert_eq!(
            users,
            vec![User {
                id,
                username: "alice".into(),
                email: "a@x.com".into(),
                password: "pw".into(),
            }]
        );
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);

        let first = repo.add_one(alice()).await.unwrap();
        let second = repo.add_one(NewUser::new("bob", "b@x.com", "pw2")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn get_all_on_empty_store() {
        let sessions = sessions().await;
        assert!(UserRepo::new(&sessions).get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_email_changes_only_email() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);
        let id = repo.add_one(alice()).await.unwrap();

        let rows = repo.update_email(id, "new@x.com").await.unwrap();
        assert_eq!(rows, 1);

        let users = repo.get_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "new@x.com");
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "pw");
    }

    #[tokio::test]
    async fn update_email_on_missing_user_is_noop() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);
        repo.add_one(alice()).await.unwrap();

        let rows = repo.update_email(999, "ghost@x.com").await.unwrap();
        assert_eq!(rows, 0);
        assert_eq!(repo.get_all().await.unwrap()[0].email, "a@x.com");
    }

    #[tokio::test]
    async fn delete_cascades_to_posts() {
        let sessions = sessions().await;
        let users = UserRepo::new(&sessions);
        let posts = PostRepo::new(&sessions);

        let owner = users.add_one(alice()).await.unwrap();
        let other = users.add_one(NewUser::new("bob", "b@x.com", "pw")).await.unwrap();
        for n in 0..3 {
            posts
                .add_one(NewPost::new(format!("t{n}"), "body", owner))
                .await
                .unwrap();
        }
        posts.add_one(NewPost::new("keep", "body", other)).await.unwrap();

        let removed = users.delete(owner).await.unwrap();
        assert_eq!(removed, 3);

        assert!(posts.get_posts(owner).await.unwrap().is_empty());
        assert_eq!(posts.get_posts(other).await.unwrap().len(), 1);

        let remaining: Vec<i64> = users.get_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(remaining, vec![other]);
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);
        repo.add_one(alice()).await.unwrap();

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_user_without_posts() {
        let sessions = sessions().await;
        let repo = UserRepo::new(&sessions);
        let id = repo.add_one(alice()).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
