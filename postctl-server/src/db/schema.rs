//! Relational schema for users and posts
//!
//! `posts.user_id` references `users.id` with `ON DELETE CASCADE`, so
//! removing a user removes its posts in the same statement.

use sqlx::SqlitePool;

use super::DbError;

/// How to prepare the schema at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// Create missing relations, keep existing rows.
    #[default]
    Ensure,
    /// Drop every known relation and recreate it empty (dev/demo only).
    Reset,
}

const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id)",
];

// Children first
const DROP_STATEMENTS: &[&str] = &["DROP TABLE IF EXISTS posts", "DROP TABLE IF EXISTS users"];

/// Prepare the schema according to `mode`.
pub async fn bootstrap(pool: &SqlitePool, mode: SchemaMode) -> Result<(), DbError> {
    match mode {
        SchemaMode::Ensure => ensure(pool).await,
        SchemaMode::Reset => reset(pool).await,
    }
}

/// Create both relations if they do not exist yet. Idempotent.
pub async fn ensure(pool: &SqlitePool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("schema ensured");
    Ok(())
}

/// Drop both relations and recreate them. Every row is lost.
pub async fn reset(pool: &SqlitePool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;
    for statement in DROP_STATEMENTS.iter().chain(CREATE_STATEMENTS) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("schema dropped and recreated");
    Ok(())
}
