//! Database error type shared by the session factory and repositories

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// The store rejected a write (unique, foreign key, not-null or check).
    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::ConstraintViolation {
                        message: db_err.message().to_owned(),
                    };
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}

impl DbError {
    /// True when the store rejected the write on a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}
