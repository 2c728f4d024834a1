//! Database layer - connection pool, sessions, schema and repositories
//!
//! # Design Principles
//!
//! - One session (transaction) per repository call, committed before return
//! - Dropping an uncommitted session rolls it back
//! - Cascade deletes are enforced by the store, not by application loops
//! - List operations that need the owning user use a JOIN - no N+1 queries

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use pool::{create_in_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::SchemaMode;
pub use session::{Session, SessionFactory};
