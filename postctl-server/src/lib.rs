//! postctl-server: HTTP service over users and their posts
//!
//! Exposes create/read/update/delete operations for two related
//! entities backed by SQLite. Deleting a user cascades to its posts.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, SchemaMode, SessionFactory};
pub use http::{build_router, run_server, ServerConfig, ServerError};
