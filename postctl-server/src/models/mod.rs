//! Request-side domain models
//!
//! Inputs arrive as query parameters and are checked only for shape and
//! type; values are stored as given.

pub mod post;
pub mod user;
pub mod validation;

pub use post::{NewPost, PostContentUpdate, PostId};
pub use user::{NewUser, UserEmailUpdate, UserId};
pub use validation::ValidationError;
