//! Session factory - one transactional unit of work per repository call
//!
//! A [`Session`] is a sqlx transaction checked out of the pool. Committing
//! it makes the writes visible; dropping it on any other exit path rolls
//! them back. Rows read through a session are plain values, so they stay
//! usable after commit without a reload.

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::pool::{create_in_memory_pool, create_pool_with_options};
use super::schema::{self, SchemaMode};
use super::DbError;

/// One logical session: a transaction bound to a pooled connection.
pub type Session = Transaction<'static, Sqlite>;

/// Hands out sessions over a shared connection pool.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    pool: SqlitePool,
}

impl SessionFactory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` with at most `max_connections` connections.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool_with_options(database_url, max_connections).await?;
        Ok(Self::new(pool))
    }

    /// Factory over a private in-memory database with the schema in place.
    pub async fn in_memory() -> Result<Self, DbError> {
        let factory = Self::new(create_in_memory_pool().await?);
        factory.bootstrap(SchemaMode::Ensure).await?;
        Ok(factory)
    }

    /// Open a new session.
    pub async fn begin(&self) -> Result<Session, DbError> {
        Ok(self.pool.begin().await?)
    }

    /// Prepare the schema according to `mode`.
    pub async fn bootstrap(&self, mode: SchemaMode) -> Result<(), DbError> {
        schema::bootstrap(&self.pool, mode).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Sessions still open are rolled back.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
