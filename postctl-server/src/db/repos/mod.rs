//! Repository implementations for database access
//!
//! Each repository method:
//! - Opens its own session and commits it before returning
//! - Relies on DB constraints instead of check-then-insert
//! - Uses JOINs when a list needs the owning user (no N+1)

pub mod posts;
pub mod users;

pub use posts::{Post, PostRepo, PostWithUser};
pub use users::{User, UserRepo};
