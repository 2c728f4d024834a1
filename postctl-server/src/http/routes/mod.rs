//! Route handlers organized by resource

pub mod health;
pub mod posts;
pub mod users;

use serde::Serialize;

/// Body returned by the create endpoints
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}
