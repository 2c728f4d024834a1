//! User inputs

use serde::Deserialize;

/// Fields of a user to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Stored exactly as given.
    pub password: String,
}

/// Selects a single user by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UserId {
    pub user_id: i64,
}

/// Replacement email for one user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserEmailUpdate {
    pub user_id: i64,
    pub new_email: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
